use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;

use crate::tui::theme::Theme;
use crate::tui::{App, Command, Subscription};

struct TimerEntry<Msg> {
    id: &'static str,
    interval: Duration,
    last_tick: Instant,
    msg: Msg,
}

/// Single-app runtime: routes key events through the subscription map,
/// fires due timers, and polls pending async commands cooperatively from
/// the one event loop. All state mutation happens on this thread, message
/// by message, to completion.
pub struct Runtime<A: App> {
    state: A::State,
    theme: Theme,

    /// Keyboard subscriptions, rebuilt after every update
    key_subscriptions: HashMap<KeyCode, A::Msg>,

    /// Timer subscriptions; phase survives re-collection via the stable id
    timers: Vec<TimerEntry<A::Msg>>,

    /// Pending async commands
    pending_async: Vec<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,

    should_quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(state: A::State, theme: Theme) -> Self {
        let mut runtime = Self {
            state,
            theme,
            key_subscriptions: HashMap::new(),
            timers: Vec::new(),
            pending_async: Vec::new(),
            should_quit: false,
        };
        runtime.update_subscriptions();
        runtime
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Keyboard bindings for the help line.
    pub fn key_bindings(&self) -> Vec<(KeyCode, String)> {
        A::subscriptions(&self.state)
            .into_iter()
            .filter_map(|sub| match sub {
                Subscription::Keyboard {
                    key, description, ..
                } => Some((key, description)),
                _ => None,
            })
            .collect()
    }

    /// Runs one message through update, executes the resulting command,
    /// then re-collects subscriptions so they reflect the new state.
    pub fn dispatch(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.execute_command(command);
        self.update_subscriptions();
    }

    /// Handle a keyboard event. Returns false once the app asked to quit.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return !self.should_quit;
        }
        if let Some(msg) = self.key_subscriptions.get(&key_event.code).cloned() {
            self.dispatch(msg);
        }
        !self.should_quit
    }

    /// Fire every timer whose interval has elapsed.
    pub fn poll_timers(&mut self) {
        let now = Instant::now();
        let mut due = Vec::new();
        for timer in &mut self.timers {
            if now.duration_since(timer.last_tick) >= timer.interval {
                timer.last_tick = now;
                due.push(timer.msg.clone());
            }
        }
        for msg in due {
            self.dispatch(msg);
        }
    }

    /// Poll pending async commands with a noop waker and deliver completed
    /// results. Uncompleted futures stay queued for the next frame.
    pub fn poll_async(&mut self) {
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut completed = Vec::new();
        for (i, future) in self.pending_async.iter_mut().enumerate() {
            if let Poll::Ready(msg) = future.as_mut().poll(&mut cx) {
                completed.push((i, msg));
            }
        }

        // Remove in reverse order to keep indices valid.
        completed.sort_by(|a, b| b.0.cmp(&a.0));
        for (i, msg) in completed {
            self.pending_async.remove(i);
            self.dispatch(msg);
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        A::view(&self.state, frame, area, &self.theme);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn execute_command(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd);
                }
            }
            Command::Perform(future) => {
                self.pending_async.push(future);
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Re-collect subscriptions from the current state. Keyboard maps are
    /// replaced wholesale; timers keep their phase when the same id is
    /// still subscribed, and are cancelled the moment it is not.
    fn update_subscriptions(&mut self) {
        self.key_subscriptions.clear();

        let mut next_timers: Vec<TimerEntry<A::Msg>> = Vec::new();
        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard { key, msg, .. } => {
                    self.key_subscriptions.insert(key, msg);
                }
                Subscription::Timer { id, interval, msg } => {
                    let last_tick = self
                        .timers
                        .iter()
                        .find(|t| t.id == id && t.interval == interval)
                        .map(|t| t.last_tick)
                        .unwrap_or_else(Instant::now);
                    next_timers.push(TimerEntry {
                        id,
                        interval,
                        last_tick,
                        msg,
                    });
                }
            }
        }
        self.timers = next_timers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    struct Counter;

    #[derive(Default)]
    struct State {
        count: u32,
        armed: bool,
    }

    #[derive(Clone)]
    enum Msg {
        Increment,
        Arm,
        Quit,
    }

    impl App for Counter {
        type State = State;
        type Msg = Msg;

        fn update(state: &mut State, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Increment => {
                    state.count += 1;
                    Command::None
                }
                Msg::Arm => {
                    state.armed = true;
                    Command::None
                }
                Msg::Quit => Command::Quit,
            }
        }

        fn view(_state: &State, _frame: &mut Frame, _area: Rect, _theme: &Theme) {}

        fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
            let mut subs = vec![
                Subscription::keyboard(KeyCode::Char('i'), "Increment", Msg::Increment),
                Subscription::keyboard(KeyCode::Char('a'), "Arm", Msg::Arm),
                Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
            ];
            if state.armed {
                subs.push(Subscription::timer(
                    "armed",
                    Duration::from_millis(1),
                    Msg::Increment,
                ));
            }
            subs
        }

        fn title() -> &'static str {
            "counter"
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn subscribed_keys_dispatch_messages() {
        let mut rt = Runtime::<Counter>::new(State::default(), Theme::default());
        assert!(rt.handle_key(press(KeyCode::Char('i'))));
        assert!(rt.handle_key(press(KeyCode::Char('i'))));
        assert_eq!(rt.state().count, 2);

        // Unsubscribed keys are ignored.
        assert!(rt.handle_key(press(KeyCode::Char('z'))));
        assert_eq!(rt.state().count, 2);
    }

    #[test]
    fn quit_command_stops_the_runtime() {
        let mut rt = Runtime::<Counter>::new(State::default(), Theme::default());
        assert!(!rt.handle_key(press(KeyCode::Char('q'))));
        assert!(rt.should_quit());
    }

    #[test]
    fn timers_follow_state_changes() {
        let mut rt = Runtime::<Counter>::new(State::default(), Theme::default());
        assert!(rt.timers.is_empty());

        rt.handle_key(press(KeyCode::Char('a')));
        assert_eq!(rt.timers.len(), 1);

        std::thread::sleep(Duration::from_millis(2));
        rt.poll_timers();
        assert_eq!(rt.state().count, 1);
    }

    #[test]
    fn completed_async_commands_deliver_messages() {
        let mut rt = Runtime::<Counter>::new(State::default(), Theme::default());
        rt.execute_command(Command::perform(async { () }, |_| Msg::Increment));
        rt.poll_async();
        assert_eq!(rt.state().count, 1);
    }
}
