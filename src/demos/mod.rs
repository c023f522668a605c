//! The three interactive demo widgets. Each is a plain state machine; the
//! TUI layer owns their tick sources (timer subscriptions) and async tasks,
//! so every transition here is synchronous and unit-testable.

mod fetch;
mod leak;
mod timer;

pub use fetch::{FetchDemo, FetchTicket, UserRecord};
pub use leak::LeakDemo;
pub use timer::TimerDemo;

use std::collections::VecDeque;

use chrono::Local;

/// Bounded activity log: newest appended, oldest evicted past capacity.
/// Entries carry a wall-clock prefix so interleavings read naturally.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    capacity: usize,
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, message: impl AsRef<str>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries
            .push_back(format!("{}: {}", Local::now().format("%H:%M:%S"), message.as_ref()));
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_evicts_oldest_beyond_capacity() {
        let mut log = ActivityLog::new(3);
        for i in 0..5 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.len(), 3);
        let entries: Vec<&str> = log.entries().collect();
        assert!(entries[0].ends_with("entry 2"));
        assert!(entries[2].ends_with("entry 4"));
    }

    #[test]
    fn last_returns_newest_entry() {
        let mut log = ActivityLog::new(2);
        assert!(log.last().is_none());
        log.push("first");
        log.push("second");
        assert!(log.last().unwrap().ends_with("second"));
    }
}
