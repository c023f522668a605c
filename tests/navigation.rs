//! End-to-end checks of the navigation core: bounded walks, synchronizer
//! ordering, and resuming from persisted progress.

use std::fs;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use lifecycle_deck::deck::builtin_deck;
use lifecycle_deck::nav::{NavEvent, NavigationController, Synchronizer};
use lifecycle_deck::progress::{ProgressRecord, ProgressStore, FRESHNESS_WINDOW_MS};
use lifecycle_deck::sync::ProgressSync;

struct Tagger {
    tag: &'static str,
    seen: Arc<Mutex<Vec<(&'static str, usize)>>>,
}

impl Synchronizer for Tagger {
    fn slide_changed(&mut self, event: &NavEvent<'_>) {
        self.seen.lock().unwrap().push((self.tag, event.index));
    }
}

fn scratch_store(name: &str) -> ProgressStore {
    let path = std::env::temp_dir().join(format!(
        "lifecycle-deck-it-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    ProgressStore::at(path)
}

#[test]
fn ten_nexts_on_an_eight_slide_deck_end_at_the_last() {
    let deck = builtin_deck();
    assert_eq!(deck.len(), 8);

    let mut nav = NavigationController::new(deck, 0);
    for _ in 0..10 {
        nav.next();
    }
    assert_eq!(nav.current(), 7);
}

#[test]
fn synchronizers_run_in_registration_order_on_every_change() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut nav = NavigationController::new(builtin_deck(), 0);
    for tag in ["title", "progress", "highlight"] {
        nav.register(Box::new(Tagger {
            tag,
            seen: seen.clone(),
        }));
    }

    nav.next();
    nav.go_to(4);
    nav.go_to(4); // no-op, notifies nobody
    nav.prev();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            ("title", 1),
            ("progress", 1),
            ("highlight", 1),
            ("title", 4),
            ("progress", 4),
            ("highlight", 4),
            ("title", 3),
            ("progress", 3),
            ("highlight", 3),
        ]
    );
}

#[test]
fn progress_written_by_navigation_resumes_a_later_session() {
    let store = scratch_store("resume");

    let mut nav = NavigationController::new(builtin_deck(), 0);
    nav.register(Box::new(ProgressSync::new(store.clone())));
    nav.next();
    nav.next();
    nav.next();

    // A later controller initialized from the same store resumes at 3.
    let resumed = store.load(8).unwrap_or(0);
    let nav2 = NavigationController::new(builtin_deck(), resumed);
    assert_eq!(nav2.current(), 3);

    let _ = fs::remove_file(store.path());
}

#[test]
fn invalid_and_stale_records_fall_back_to_the_first_slide() {
    let store = scratch_store("fallback");

    // Out-of-range index.
    fs::write(
        store.path(),
        serde_json::to_string(&ProgressRecord {
            current_slide: 99,
            timestamp: Utc::now().timestamp_millis(),
            total_slides: 8,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(store.load(8).unwrap_or(0), 0);

    // Fresh and in range.
    fs::write(
        store.path(),
        serde_json::to_string(&ProgressRecord {
            current_slide: 3,
            timestamp: Utc::now().timestamp_millis(),
            total_slides: 8,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(store.load(8), Some(3));

    // Stale.
    fs::write(
        store.path(),
        serde_json::to_string(&ProgressRecord {
            current_slide: 3,
            timestamp: Utc::now().timestamp_millis() - FRESHNESS_WINDOW_MS - 1000,
            total_slides: 8,
        })
        .unwrap(),
    )
    .unwrap();
    assert_eq!(store.load(8).unwrap_or(0), 0);

    // Corrupt.
    fs::write(store.path(), "definitely not json").unwrap();
    assert_eq!(store.load(8).unwrap_or(0), 0);

    let _ = fs::remove_file(store.path());
}
