#![forbid(unsafe_code)]

//! Deterministic replay of a [`Script`] against a mounted carousel.
//!
//! Time is simulated: the replayer owns a clock that only advances by the
//! amounts the script asks for, so debounce and throttle behavior is the
//! same on every run.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carousel::{
    Carousel, CarouselConfig, CarouselOutcome, Instant, PaneMeasure, SelectionChange,
    render_markup,
};
use serde::Serialize;

use crate::script::{Action, Script, Step};

/// Upper bound on ticks spent draining rate-limited work at the end.
const MAX_FLUSH_TICKS: usize = 16;

/// Host stand-in: reports one width for every pane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemoHost {
    /// Width reported for every pane.
    pub pane_width: Option<f64>,
}

impl PaneMeasure for DemoHost {
    fn pane_width(&self, _index: usize) -> Option<f64> {
        self.pane_width
    }
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Step number, from 0.
    pub step: usize,
    /// Simulated milliseconds since the session started.
    pub at_ms: u64,
    /// Action name.
    pub action: &'static str,
    /// Human-readable summary of the widget's reaction.
    pub outcome: String,
    /// Selection after the step.
    pub select: usize,
}

/// Result of a whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Per-step reactions.
    pub steps: Vec<StepReport>,
    /// Every `(next, prev)` pair the `on_select` callback received.
    pub notifications: Vec<(usize, usize)>,
    /// Selection at the end of the session.
    pub final_select: usize,
    /// Markup of the final state.
    pub markup: String,
}

/// Replays scripts step by step.
pub struct Replayer {
    carousel: Carousel<String>,
    host: DemoHost,
    start: Instant,
    elapsed: Duration,
    notifications: Rc<RefCell<Vec<(usize, usize)>>>,
}

impl std::fmt::Debug for Replayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Replayer")
            .field("carousel", &self.carousel)
            .field("host", &self.host)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

impl Replayer {
    /// Build and mount a carousel for the script's panes.
    #[must_use]
    pub fn new(script: &Script, config: CarouselConfig) -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        let mut carousel = Carousel::new(script.panes.iter().cloned(), config)
            .on_select(move |next, prev| sink.borrow_mut().push((next, prev)));
        let host = DemoHost {
            pane_width: script.pane_width,
        };
        carousel.mount(&host);

        Self {
            carousel,
            host,
            start: Instant::now(),
            elapsed: Duration::ZERO,
            notifications,
        }
    }

    /// The carousel under test.
    #[must_use]
    pub fn carousel(&self) -> &Carousel<String> {
        &self.carousel
    }

    fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Run one step.
    pub fn step(&mut self, index: usize, step: &Step) -> StepReport {
        self.elapsed += Duration::from_millis(step.after_ms);
        let now = self.now();
        let mut reaction = Reaction::default();

        let tick = self.carousel.tick(now, &self.host);
        reaction.tick(tick.selection, tick.remeasured);

        if let Action::Resize {
            pane_width: Some(width),
            ..
        } = step.action
        {
            self.host.pane_width = Some(width);
        }

        for event in step.action.events() {
            reaction.outcome(self.carousel.handle_event(&event, now));
        }
        match step.action {
            Action::Click { index } => reaction.selection(self.carousel.click_selector(index)),
            Action::Select { index } => reaction.selection(self.carousel.update_select(index)),
            _ => {}
        }

        let report = StepReport {
            step: index,
            at_ms: self.elapsed_ms(),
            action: action_name(&step.action),
            outcome: reaction.summary(),
            select: self.carousel.select(),
        };
        tracing::info!(
            message = "demo.step",
            step = report.step,
            at_ms = report.at_ms,
            action = report.action,
            outcome = %report.outcome,
            select = report.select
        );
        report
    }

    /// Let pending debounced and throttled work run to completion.
    pub fn flush(&mut self) -> Option<StepReport> {
        let mut reaction = Reaction::default();
        for _ in 0..MAX_FLUSH_TICKS {
            let Some(wait) = self.carousel.next_deadline(self.now()) else {
                break;
            };
            self.elapsed += wait;
            let tick = self.carousel.tick(self.now(), &self.host);
            reaction.tick(tick.selection, tick.remeasured);
        }
        if reaction.is_quiet() {
            return None;
        }
        Some(StepReport {
            step: usize::MAX,
            at_ms: self.elapsed_ms(),
            action: "flush",
            outcome: reaction.summary(),
            select: self.carousel.select(),
        })
    }

    /// Replay a whole script.
    pub fn run(mut self, script: &Script) -> SessionReport {
        let mut steps: Vec<StepReport> = script
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.step(index, step))
            .collect();
        if let Some(mut flushed) = self.flush() {
            flushed.step = steps.len();
            steps.push(flushed);
        }

        let final_select = self.carousel.select();
        let markup = render_markup(&self.carousel.view());
        let notifications = self.notifications.borrow().clone();
        SessionReport {
            steps,
            notifications,
            final_select,
            markup,
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Key { .. } => "key",
        Action::KeyCode { .. } => "key_code",
        Action::Drag { .. } => "drag",
        Action::Click { .. } => "click",
        Action::Select { .. } => "select",
        Action::Resize { .. } => "resize",
        Action::Blur => "blur",
        Action::Wait => "wait",
    }
}

/// Accumulates everything the widget reported during one step.
#[derive(Debug, Default)]
struct Reaction {
    changes: Vec<SelectionChange>,
    redraw: bool,
    deferred: bool,
    remeasured: bool,
}

impl Reaction {
    fn outcome(&mut self, outcome: CarouselOutcome) {
        match outcome {
            CarouselOutcome::Ignored => {}
            CarouselOutcome::Redraw => self.redraw = true,
            CarouselOutcome::Deferred => self.deferred = true,
            CarouselOutcome::Selected(change) => self.changes.push(change),
        }
    }

    fn selection(&mut self, change: Option<SelectionChange>) {
        self.changes.extend(change);
    }

    fn tick(&mut self, change: Option<SelectionChange>, remeasured: bool) {
        self.selection(change);
        self.remeasured |= remeasured;
    }

    fn is_quiet(&self) -> bool {
        self.changes.is_empty() && !self.redraw && !self.deferred && !self.remeasured
    }

    fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .changes
            .iter()
            .map(|c| format!("{} -> {} ({:?})", c.prev, c.next, c.reason))
            .collect();
        if self.remeasured {
            parts.push("remeasured".into());
        }
        if self.deferred {
            parts.push("deferred".into());
        }
        if self.redraw && self.changes.is_empty() {
            parts.push("redraw".into());
        }
        if parts.is_empty() {
            "ignored".into()
        } else {
            parts.join(", ")
        }
    }
}
