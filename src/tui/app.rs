use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

use crate::tui::theme::Theme;
use crate::tui::{Command, Subscription};

/// The trait a TUI app implements, in the Elm shape:
/// - State: the app's current data
/// - Msg: events that can happen
/// - update: handles a message, mutates state, returns a command
/// - view: renders the current state
/// - subscriptions: declares the inputs the app wants, as a function of
///   state, so keyboard maps and timers follow state changes
pub trait App: Sized + Send + 'static {
    type State: Send;
    type Msg: Clone + Send + 'static;

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    fn view(state: &Self::State, frame: &mut Frame, area: Rect, theme: &Theme);

    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    fn title() -> &'static str;

    /// Optional status line, shown in the footer.
    fn status(_state: &Self::State, _theme: &Theme) -> Option<Line<'static>> {
        None
    }
}
