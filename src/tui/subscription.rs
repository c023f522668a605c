use crossterm::event::KeyCode;
use std::time::Duration;

/// Inputs an app wants to receive, declared from `subscriptions()` and
/// re-collected after every update so they can depend on state.
pub enum Subscription<Msg> {
    /// Subscribe to a specific keyboard key
    Keyboard {
        key: KeyCode,
        msg: Msg,
        description: String,
    },

    /// Subscribe to periodic timer events. The `id` is stable across
    /// re-collections: a timer that stays subscribed keeps its phase, one
    /// that disappears is cancelled.
    Timer {
        id: &'static str,
        interval: Duration,
        msg: Msg,
    },
}

impl<Msg> Subscription<Msg> {
    /// Helper to create a keyboard subscription
    pub fn keyboard(key: KeyCode, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key,
            msg,
            description: description.into(),
        }
    }

    /// Helper to create a timer subscription
    pub fn timer(id: &'static str, interval: Duration, msg: Msg) -> Self {
        Subscription::Timer { id, interval, msg }
    }
}
