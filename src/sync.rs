//! The three synchronizers wired behind the navigation controller: window
//! title, persisted progress, highlight re-sync. Registration order in
//! `main` fixes their execution order (title, then persistence, then
//! highlighting).

use std::io::Write;
use std::sync::{Arc, Mutex};

use crossterm::terminal::SetTitle;
use log::warn;

use crate::highlight::Highlighter;
use crate::nav::{NavEvent, Synchronizer};
use crate::progress::ProgressStore;

/// Where the formatted title goes. The production sink writes the terminal
/// title escape; tests record the strings instead.
pub trait TitleSink: Send {
    fn set_title(&mut self, title: &str);
}

/// Sets the terminal window title via the OSC escape.
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&mut self, title: &str) {
        let mut stdout = std::io::stdout();
        if let Err(e) = crossterm::execute!(stdout, SetTitle(title)) {
            warn!("failed to set terminal title: {e}");
        }
        let _ = stdout.flush();
    }
}

pub struct TitleSync<S: TitleSink> {
    sink: S,
}

impl<S: TitleSink> TitleSync<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn format(title: &str) -> String {
        format!("{title} - Lifecycle & Effects")
    }
}

impl<S: TitleSink> Synchronizer for TitleSync<S> {
    fn slide_changed(&mut self, event: &NavEvent<'_>) {
        self.sink.set_title(&Self::format(&event.slide.title));
    }
}

/// Fire-and-forget persistence of the current index. The store itself
/// swallows and logs write failures.
pub struct ProgressSync {
    store: ProgressStore,
}

impl ProgressSync {
    pub fn new(store: ProgressStore) -> Self {
        Self { store }
    }
}

impl Synchronizer for ProgressSync {
    fn slide_changed(&mut self, event: &NavEvent<'_>) {
        self.store.save(event.index, event.total);
    }
}

/// Rebuilds the highlight cache for the slide that just became visible.
/// The rebuild is deterministic, so redundant triggers are harmless.
pub struct HighlightSync {
    highlighter: Arc<Mutex<Highlighter>>,
}

impl HighlightSync {
    pub fn new(highlighter: Arc<Mutex<Highlighter>>) -> Self {
        Self { highlighter }
    }
}

impl Synchronizer for HighlightSync {
    fn slide_changed(&mut self, event: &NavEvent<'_>) {
        match self.highlighter.lock() {
            Ok(mut highlighter) => highlighter.refresh(event.slide),
            Err(e) => warn!("highlighter lock poisoned: {e}"),
        }
    }
}
