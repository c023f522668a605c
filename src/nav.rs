//! Current-slide state and its valid transitions. The controller owns the
//! index outright; everything that must react to a change (title,
//! persistence, highlighting) registers as a [`Synchronizer`] and is
//! notified synchronously, in registration order, before the next input is
//! processed.

use log::debug;

use crate::deck::{Deck, SlideRecord};

/// Payload delivered to synchronizers on every successful index change.
pub struct NavEvent<'a> {
    pub index: usize,
    pub total: usize,
    pub slide: &'a SlideRecord,
}

/// A side effect of a navigation change. Implementations must not fail;
/// anything that can go wrong is handled (and at most logged) internally.
pub trait Synchronizer: Send {
    fn slide_changed(&mut self, event: &NavEvent<'_>);
}

pub struct NavigationController {
    deck: Deck,
    current: usize,
    synchronizers: Vec<Box<dyn Synchronizer>>,
}

impl NavigationController {
    /// `initial` is clamped into range rather than trusted.
    pub fn new(deck: Deck, initial: usize) -> Self {
        let last = deck.len() - 1;
        Self {
            deck,
            current: initial.min(last),
            synchronizers: Vec::new(),
        }
    }

    /// Registration order is notification order.
    pub fn register(&mut self, synchronizer: Box<dyn Synchronizer>) {
        self.synchronizers.push(synchronizer);
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &SlideRecord {
        &self.deck.slides()[self.current]
    }

    pub fn total(&self) -> usize {
        self.deck.len()
    }

    /// Advance one slide, clamped at the end. Returns whether the index
    /// changed; a clamped no-op notifies nobody.
    pub fn next(&mut self) -> bool {
        let target = (self.current + 1).min(self.deck.len() - 1);
        self.set_index(target)
    }

    /// Step back one slide, clamped at the start.
    pub fn prev(&mut self) -> bool {
        let target = self.current.saturating_sub(1);
        self.set_index(target)
    }

    /// Jump to an explicit index. Out-of-range requests are silently
    /// ignored; this is not an error condition.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.deck.len() {
            debug!("ignoring out-of-range jump to {index}");
            return false;
        }
        self.set_index(index)
    }

    /// Re-announce the current slide to all synchronizers. Used once at
    /// startup so the title, progress file and highlight cache reflect the
    /// first visible slide.
    pub fn refresh(&mut self) {
        self.notify();
    }

    fn set_index(&mut self, index: usize) -> bool {
        if index == self.current {
            return false;
        }
        self.current = index;
        self.notify();
        true
    }

    fn notify(&mut self) {
        let event = NavEvent {
            index: self.current,
            total: self.deck.len(),
            slide: &self.deck.slides()[self.current],
        };
        for synchronizer in &mut self.synchronizers {
            synchronizer.slide_changed(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_deck;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<usize>>>);

    impl Synchronizer for Recorder {
        fn slide_changed(&mut self, event: &NavEvent<'_>) {
            self.0.lock().unwrap().push(event.index);
        }
    }

    #[test]
    fn next_clamps_at_last_slide() {
        let mut nav = NavigationController::new(builtin_deck(), 0);
        assert_eq!(nav.total(), 8);
        for _ in 0..10 {
            nav.next();
        }
        assert_eq!(nav.current(), 7);
    }

    #[test]
    fn prev_clamps_at_first_slide() {
        let mut nav = NavigationController::new(builtin_deck(), 1);
        assert!(nav.prev());
        assert!(!nav.prev());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut nav = NavigationController::new(builtin_deck(), 2);
        assert!(!nav.go_to(99));
        assert_eq!(nav.current(), 2);
        assert!(nav.go_to(5));
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn initial_index_is_clamped() {
        let nav = NavigationController::new(builtin_deck(), 42);
        assert_eq!(nav.current(), 7);
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let mut nav = NavigationController::new(builtin_deck(), 0);
        // Deterministic pseudo-random step sequence.
        let mut seed: u64 = 0x9e3779b9;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            if seed % 2 == 0 {
                nav.next();
            } else {
                nav.prev();
            }
            assert!(nav.current() < nav.total());
        }
    }

    #[test]
    fn clamped_no_ops_notify_nobody() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut nav = NavigationController::new(builtin_deck(), 0);
        nav.register(Box::new(Recorder(seen.clone())));

        nav.prev(); // already at 0
        nav.go_to(0); // already there
        nav.go_to(99); // out of range
        assert!(seen.lock().unwrap().is_empty());

        nav.next();
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }
}
