//! The slideshow app: navigation, the three demo widgets, and the view.
//! Tick sources and the simulated fetch live here as subscriptions and
//! async commands, so a widget's resources are exactly as alive as its
//! state says they should be. The one exception is the leak demo's leaky
//! child, whose subscription deliberately survives unmount.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::deck::{DemoKind, SlideBlock, SlideRecord};
use crate::demos::{FetchDemo, FetchTicket, LeakDemo, TimerDemo};
use crate::highlight::Highlighter;
use crate::keys::{self, KeyAction};
use crate::nav::NavigationController;
use crate::tui::theme::Theme;
use crate::tui::{App, Command, Subscription};

pub struct Slideshow;

pub struct SlideshowState {
    pub nav: NavigationController,
    pub timer: TimerDemo,
    pub fetch: FetchDemo,
    pub leak: LeakDemo,
    highlighter: Arc<Mutex<Highlighter>>,
}

impl SlideshowState {
    pub fn new(nav: NavigationController, highlighter: Arc<Mutex<Highlighter>>) -> Self {
        Self {
            nav,
            timer: TimerDemo::new(),
            fetch: FetchDemo::new(),
            leak: LeakDemo::new(),
            highlighter,
        }
    }

    /// Runs one navigation mutation. Synchronizers fire inside the
    /// controller before this returns; afterwards the demos of the slide
    /// we left are deactivated and the new slide's demo activated.
    fn navigate(&mut self, go: impl FnOnce(&mut NavigationController) -> bool) -> Command<Msg> {
        let prev = self.nav.current();
        if !go(&mut self.nav) {
            return Command::None;
        }
        self.deactivate_demo(prev);
        self.activate_demo(self.nav.current())
    }

    fn deactivate_demo(&mut self, index: usize) {
        match self.nav.deck().slides()[index].demo() {
            Some(DemoKind::Timer) => self.timer.stop(),
            Some(DemoKind::Fetch) => self.fetch.deactivate(),
            // Cleans up the correct child only; the leaky tick source
            // stays alive on purpose.
            Some(DemoKind::LeakComparison) => self.leak.hide(),
            None => {}
        }
    }

    fn activate_demo(&mut self, index: usize) -> Command<Msg> {
        match self.nav.deck().slides()[index].demo() {
            // The fetch widget kicks off a request for the current key as
            // soon as it is shown. Timer and leak children wait for input.
            Some(DemoKind::Fetch) => fetch_command(self.fetch.begin_fetch()),
            _ => Command::None,
        }
    }
}

#[derive(Clone)]
pub enum Msg {
    Key(KeyAction),
    TimerTick,
    ToggleTimer,
    ResetTimer,
    NextUser,
    ResetUser,
    FetchDone(FetchTicket),
    ToggleLeaky,
    ToggleCorrect,
    LeakyTick,
    CorrectTick,
}

/// The simulated network delay: a plain sleep, keyed by the ticket the
/// widget handed out when the fetch began.
fn fetch_command(ticket: FetchTicket) -> Command<Msg> {
    Command::perform(
        async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            ticket
        },
        Msg::FetchDone,
    )
}

impl App for Slideshow {
    type State = SlideshowState;
    type Msg = Msg;

    fn update(state: &mut SlideshowState, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(action) => match action {
                KeyAction::Next => state.navigate(|nav| nav.next()),
                KeyAction::Prev => state.navigate(|nav| nav.prev()),
                KeyAction::GoTo(i) => state.navigate(|nav| nav.go_to(i)),
                KeyAction::Quit => Command::Quit,
            },
            Msg::ToggleTimer => {
                state.timer.toggle();
                Command::None
            }
            Msg::ResetTimer => {
                state.timer.reset();
                Command::None
            }
            Msg::TimerTick => {
                state.timer.tick();
                Command::None
            }
            Msg::NextUser => fetch_command(state.fetch.next_user()),
            Msg::ResetUser => fetch_command(state.fetch.reset_user()),
            Msg::FetchDone(ticket) => {
                state.fetch.complete(ticket);
                Command::None
            }
            Msg::ToggleLeaky => {
                state.leak.toggle_leaky();
                Command::None
            }
            Msg::ToggleCorrect => {
                state.leak.toggle_correct();
                Command::None
            }
            Msg::LeakyTick => {
                state.leak.tick_leaky();
                Command::None
            }
            Msg::CorrectTick => {
                state.leak.tick_correct();
                Command::None
            }
        }
    }

    fn subscriptions(state: &SlideshowState) -> Vec<Subscription<Msg>> {
        let mut subs: Vec<Subscription<Msg>> = keys::bindings(state.nav.total())
            .into_iter()
            .map(|(code, desc, action)| Subscription::keyboard(code, desc, Msg::Key(action)))
            .collect();

        // Demo keys only exist while their slide is visible.
        match state.nav.current_slide().demo() {
            Some(DemoKind::Timer) => {
                subs.push(Subscription::keyboard(
                    KeyCode::Char('s'),
                    "Start/stop timer",
                    Msg::ToggleTimer,
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('r'),
                    "Reset counter",
                    Msg::ResetTimer,
                ));
            }
            Some(DemoKind::Fetch) => {
                subs.push(Subscription::keyboard(
                    KeyCode::Char('n'),
                    "Next user",
                    Msg::NextUser,
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('r'),
                    "Reset to user 1",
                    Msg::ResetUser,
                ));
            }
            Some(DemoKind::LeakComparison) => {
                subs.push(Subscription::keyboard(
                    KeyCode::Char('b'),
                    "Toggle leaky timer",
                    Msg::ToggleLeaky,
                ));
                subs.push(Subscription::keyboard(
                    KeyCode::Char('g'),
                    "Toggle correct timer",
                    Msg::ToggleCorrect,
                ));
            }
            None => {}
        }

        // Tick sources. Each running widget owns exactly one; the leaky
        // child's stays subscribed after unmount because `leaky_ticking`
        // never goes false. That asymmetry is the demo.
        if state.timer.running() {
            subs.push(Subscription::timer(
                "timer-demo",
                Duration::from_secs(1),
                Msg::TimerTick,
            ));
        }
        if state.leak.leaky_ticking() {
            subs.push(Subscription::timer(
                "leak-bad",
                Duration::from_secs(1),
                Msg::LeakyTick,
            ));
        }
        if state.leak.correct_ticking() {
            subs.push(Subscription::timer(
                "leak-good",
                Duration::from_secs(1),
                Msg::CorrectTick,
            ));
        }

        subs
    }

    fn view(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(state, frame, chunks[0], theme);
        render_body(state, frame, chunks[1], theme);
        render_footer(state, frame, chunks[2], theme);
    }

    fn title() -> &'static str {
        "Lifecycle & Effects"
    }

    fn status(state: &SlideshowState, theme: &Theme) -> Option<Line<'static>> {
        Some(Line::from(Span::styled(
            format!("Slide {}/{}", state.nav.current() + 1, state.nav.total()),
            Style::default().fg(theme.lavender),
        )))
    }
}

fn render_header(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let slide = state.nav.current_slide();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            slide.title.clone(),
            Style::default()
                .fg(theme.blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}/{})", state.nav.current() + 1, state.nav.total()),
            Style::default().fg(theme.subtext),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lifecycle & Effects ")
            .style(Style::default().bg(theme.base).fg(theme.text)),
    );
    frame.render_widget(header, area);
}

fn render_body(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let slide = state.nav.current_slide();

    let (content_area, demo_area) = if slide.demo().is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(13)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let lines = content_lines(state, slide, theme);
    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.base).fg(theme.text))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, content_area);

    if let (Some(demo_area), Some(kind)) = (demo_area, slide.demo()) {
        match kind {
            DemoKind::Timer => render_timer_demo(state, frame, demo_area, theme),
            DemoKind::Fetch => render_fetch_demo(state, frame, demo_area, theme),
            DemoKind::LeakComparison => render_leak_demo(state, frame, demo_area, theme),
        }
    }
}

fn content_lines(state: &SlideshowState, slide: &SlideRecord, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut code_index = 0usize;

    for block in &slide.blocks {
        match block {
            SlideBlock::Heading(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.mauve)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
            }
            SlideBlock::Paragraph(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(theme.text),
                )));
                lines.push(Line::default());
            }
            SlideBlock::Bullet(text) => {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(theme.green)),
                    Span::styled(text.clone(), Style::default().fg(theme.text)),
                ]));
            }
            SlideBlock::Code { source, .. } => {
                let cached = state
                    .highlighter
                    .lock()
                    .ok()
                    .and_then(|h| h.block(slide.id, code_index).map(|l| l.to_vec()));
                match cached {
                    Some(styled) => lines.extend(styled),
                    // Cache miss (highlight re-sync not run yet): plain text.
                    None => {
                        lines.extend(
                            source
                                .lines()
                                .map(|l| Line::from(Span::raw(l.to_string()))),
                        );
                    }
                }
                lines.push(Line::default());
                code_index += 1;
            }
            SlideBlock::Note(text) => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.subtext)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            SlideBlock::Demo(_) => {}
        }
    }

    lines
}

fn log_lines(entries: impl Iterator<Item = String>, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "activity log:",
        Style::default()
            .fg(theme.subtext)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(entries.map(|entry| {
        Line::from(Span::styled(
            format!("  {entry}"),
            Style::default().fg(theme.subtext),
        ))
    }));
    lines
}

fn render_timer_demo(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let timer = &state.timer;
    let status = if timer.running() {
        Span::styled("running", Style::default().fg(theme.green))
    } else {
        Span::styled("stopped", Style::default().fg(theme.red))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("elapsed: {}s", timer.seconds()),
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   status: "),
            status,
        ]),
        Line::default(),
    ];
    lines.extend(log_lines(timer.log.entries().map(String::from), theme));

    let pane = Paragraph::new(lines)
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Timer Demo [s: start/stop, r: reset] "),
        );
    frame.render_widget(pane, area);
}

fn render_fetch_demo(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let fetch = &state.fetch;
    let mut lines = Vec::new();

    if fetch.loading() {
        lines.push(Line::from(Span::styled(
            format!("loading user {}...", fetch.user_id()),
            Style::default().fg(theme.yellow),
        )));
    } else if let Some(user) = fetch.user() {
        lines.push(Line::from(Span::styled(
            format!("{}  <{}>", user.name, user.email),
            Style::default()
                .fg(theme.green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("id: {}  avatar: {}", user.id, user.avatar_url),
            Style::default().fg(theme.subtext),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "no user loaded",
            Style::default().fg(theme.subtext),
        )));
    }
    lines.push(Line::default());
    lines.extend(log_lines(fetch.log.entries().map(String::from), theme));

    let pane = Paragraph::new(lines)
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Fetch Demo [n: next user, r: reset] "),
        );
    frame.render_widget(pane, area);
}

fn render_leak_demo(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let leak = &state.leak;

    let child_line = |label: &str, mounted: bool, ticking: bool, count: u64, color| {
        let status = match (mounted, ticking) {
            (true, _) => "mounted".to_string(),
            (false, true) => "unmounted, STILL TICKING".to_string(),
            (false, false) => "unmounted".to_string(),
        };
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(color)),
            Span::styled(format!("{count} ticks, {status}"), Style::default().fg(color)),
        ])
    };

    let mut lines = vec![
        child_line(
            "leaky  ",
            leak.leaky_mounted(),
            leak.leaky_ticking(),
            leak.leaky_count(),
            theme.red,
        ),
        child_line(
            "correct",
            leak.correct_mounted(),
            leak.correct_ticking(),
            leak.correct_count(),
            theme.green,
        ),
        Line::default(),
    ];
    lines.extend(log_lines(leak.log.entries().map(String::from), theme));

    let pane = Paragraph::new(lines)
        .style(Style::default().bg(theme.surface).fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Leak Demo [b: leaky child, g: correct child] "),
        );
    frame.render_widget(pane, area);
}

fn render_footer(state: &SlideshowState, frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = vec![Span::styled(
        "←/→/Space navigate  1-9 jump  q quit",
        Style::default().fg(theme.overlay),
    )];
    if let Some(status) = Slideshow::status(state, theme) {
        spans.push(Span::raw("   "));
        spans.extend(status.spans);
    }
    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.base).fg(theme.text)),
    );
    frame.render_widget(footer, area);
}
