use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::tui::{App, Runtime};

/// Owns the terminal for the life of the run. Raw mode and the alternate
/// screen are entered exactly once in `new` and left exactly once in
/// `Drop`, so teardown also happens on the error path.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
        debug!("terminal hooks installed");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!("failed to restore cursor: {e}");
        }
        debug!("terminal hooks removed");
    }
}

/// Runs the app until it quits, then restores the terminal.
pub async fn run<A: App>(mut runtime: Runtime<A>) -> Result<()> {
    let mut guard = TerminalGuard::new()?;

    loop {
        let frame_start = std::time::Instant::now();

        // Drain pending input first for minimal latency.
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !runtime.handle_key(key) {
                    return Ok(());
                }
            }
        }

        runtime.poll_timers();
        runtime.poll_async();
        if runtime.should_quit() {
            return Ok(());
        }

        guard.terminal.draw(|frame| runtime.render(frame))?;

        // Sleep out the remainder of a 16ms frame (60 FPS).
        if let Some(remaining) = Duration::from_millis(16).checked_sub(frame_start.elapsed()) {
            tokio::time::sleep(remaining).await;
        }
    }
}
