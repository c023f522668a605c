pub mod deck;
pub mod demos;
pub mod highlight;
pub mod keys;
pub mod nav;
pub mod progress;
pub mod sync;
pub mod tui;
