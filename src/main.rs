use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use lifecycle_deck::deck::builtin_deck;
use lifecycle_deck::highlight::Highlighter;
use lifecycle_deck::nav::NavigationController;
use lifecycle_deck::progress::ProgressStore;
use lifecycle_deck::sync::{HighlightSync, ProgressSync, TerminalTitle, TitleSync};
use lifecycle_deck::tui::{self, Runtime, Slideshow, SlideshowState, Theme, ThemeVariant};

#[derive(Parser)]
#[command(name = "lifecycle-deck", about = "A slideshow on effects and lifecycle, in the terminal")]
struct Cli {
    /// Start at this slide (1-based), overriding saved progress
    #[arg(long)]
    slide: Option<usize>,

    /// Ignore saved progress and start from the first slide
    #[arg(long)]
    fresh: bool,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeVariant::Mocha)]
    theme: ThemeVariant,

    /// Log file path (the TUI owns stdout)
    #[arg(long, default_value = "lifecycle-deck.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file, truncated each run; stdout belongs to the TUI.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&cli.log_file)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    info!("starting lifecycle-deck");

    let deck = builtin_deck();

    let store = match ProgressStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            warn!("progress store unavailable ({e:#}), using temp path");
            ProgressStore::at(std::env::temp_dir().join("lifecycle-deck-progress.json"))
        }
    };

    let initial = match cli.slide {
        Some(n) => n.saturating_sub(1),
        None if cli.fresh => 0,
        None => store.load(deck.len()).unwrap_or(0),
    };

    let highlighter = Arc::new(Mutex::new(Highlighter::new()));

    let mut nav = NavigationController::new(deck, initial);
    // Fixed synchronizer order: title, then persistence, then highlighting.
    nav.register(Box::new(TitleSync::new(TerminalTitle)));
    nav.register(Box::new(ProgressSync::new(store)));
    nav.register(Box::new(HighlightSync::new(highlighter.clone())));
    // Announce the first visible slide so all three reflect it.
    nav.refresh();

    let state = SlideshowState::new(nav, highlighter);
    let runtime = Runtime::<Slideshow>::new(state, Theme::new(cli.theme));

    tui::runner::run(runtime).await?;
    info!("clean shutdown");
    Ok(())
}
