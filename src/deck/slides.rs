//! The built-in deck. Content only; navigation and the demo widgets never
//! look at what is written here.

use super::{Deck, DemoKind, SlideBlock, SlideRecord};

pub fn builtin_deck() -> Deck {
    Deck::new(vec![
        SlideRecord::new(
            1,
            "Lifecycle & Effects",
            vec![
                SlideBlock::heading("Side effects in event-driven UIs"),
                SlideBlock::paragraph(
                    "State updates are the easy half of an interactive program. The hard \
                     half is everything a state change touches outside the program: the \
                     window title, persisted progress, timers, in-flight requests.",
                ),
                SlideBlock::paragraph(
                    "This deck walks through the discipline that keeps those effects \
                     correct: run them when their inputs change, and clean them up when \
                     their owner goes away.",
                ),
                SlideBlock::note("Navigate with Left/Right or Space. Digits 1-9 jump. q quits."),
            ],
        ),
        SlideRecord::new(
            2,
            "Mount, Update, Unmount",
            vec![
                SlideBlock::paragraph(
                    "Every stateful widget moves through three phases: it is created and \
                     shown (mount), its state changes while visible (update), and it is \
                     removed (unmount).",
                ),
                SlideBlock::bullet("Mount: acquire what you need - subscriptions, timers, buffers."),
                SlideBlock::bullet("Update: react to changed inputs, and only to changed inputs."),
                SlideBlock::bullet("Unmount: release everything acquired at mount, exactly once."),
                SlideBlock::code(
                    "rust",
                    "fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {\n    \
                     let mut subs = vec![Subscription::keyboard(KeyCode::Right, \"Next\", Msg::Next)];\n    \
                     if state.ticking {\n        \
                     subs.push(Subscription::timer(\"tick\", Duration::from_secs(1), Msg::Tick));\n    \
                     }\n    \
                     subs\n}",
                ),
            ],
        ),
        SlideRecord::new(
            3,
            "Effects Need Cleanup",
            vec![
                SlideBlock::paragraph(
                    "An effect that allocates a resource owns that resource. A repeating \
                     timer, an event hook, a pending request: each keeps running until \
                     someone cancels it.",
                ),
                SlideBlock::paragraph(
                    "The symmetric form is acquire-on-start, release-on-stop. When the \
                     release half is missing, the resource outlives its owner, and you \
                     have a leak.",
                ),
                SlideBlock::code(
                    "rust",
                    "fn stop(&mut self) {\n    if self.running {\n        \
                     self.running = false; // tick source is cancelled with it\n        \
                     self.log.push(\"cleanup ran, tick source cancelled\");\n    }\n}",
                ),
                SlideBlock::note("Slide 7 shows what happens when the release half is skipped."),
            ],
        ),
        SlideRecord::new(
            4,
            "Keyed Re-Runs",
            vec![
                SlideBlock::paragraph(
                    "Effects that depend on a value must re-run when that value changes - \
                     and the run for the old value must be cancelled first. A generation \
                     counter captured at task start makes staleness checkable.",
                ),
                SlideBlock::code(
                    "rust",
                    "fn begin_fetch(&mut self) -> FetchTicket {\n    \
                     self.generation += 1; // older tickets are now stale\n    \
                     self.loading = true;\n    \
                     FetchTicket { generation: self.generation, user_id: self.user_id }\n}\n\n\
                     fn complete(&mut self, ticket: FetchTicket) {\n    \
                     if ticket.generation != self.generation {\n        \
                     return; // stale: a newer request superseded this one\n    }\n    \
                     // ...safe to write the result\n}",
                ),
            ],
        ),
        SlideRecord::new(
            5,
            "Live Timer",
            vec![
                SlideBlock::paragraph(
                    "One repeating tick source, armed on start and cancelled on stop. \
                     Watch the activity log: every start is paired with exactly one \
                     cleanup entry.",
                ),
                SlideBlock::Demo(DemoKind::Timer),
                SlideBlock::note("s starts/stops the timer, r resets the counter."),
            ],
        ),
        SlideRecord::new(
            6,
            "Fetching With Cancellation",
            vec![
                SlideBlock::paragraph(
                    "A simulated one-second fetch keyed to a user id. Advance the id \
                     before the fetch lands and the stale result is discarded, never \
                     written to state.",
                ),
                SlideBlock::Demo(DemoKind::Fetch),
                SlideBlock::note("n requests the next user, r resets to user 1."),
            ],
        ),
        SlideRecord::new(
            7,
            "The Leak, Side By Side",
            vec![
                SlideBlock::paragraph(
                    "Two identical tick widgets. The correct one cancels its tick source \
                     on unmount; the leaky one skips cleanup on purpose. Unmount both and \
                     watch the log: the leaky ticks keep arriving.",
                ),
                SlideBlock::Demo(DemoKind::LeakComparison),
                SlideBlock::note("b toggles the leaky child, g toggles the correct one."),
            ],
        ),
        SlideRecord::new(
            8,
            "Rules of Thumb",
            vec![
                SlideBlock::bullet("Pair every acquire with a release owned by the same lifecycle."),
                SlideBlock::bullet("Key async work to its inputs; check the key before writing results."),
                SlideBlock::bullet("Install process-wide hooks once, and tear them down once."),
                SlideBlock::bullet("Let storage fail soft: a lost progress file is not an error the user should see."),
                SlideBlock::bullet("Treat a tick after stop as a bug in the guard, not in the clock."),
                SlideBlock::paragraph("That is the whole lesson. Everything else is bookkeeping."),
            ],
        ),
    ])
}
