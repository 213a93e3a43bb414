#![forbid(unsafe_code)]

//! Content strip: pane layout plus drag-to-swipe handling.
//!
//! [`Content`] holds everything the strip needs between events: the drag
//! gesture, the measured pane width, the debounced resize state, and the key
//! of the last rendered frame. The pane sequence and the selected index are
//! owned by the root and passed in as [`ContentProps`].
//!
//! # Lifecycle
//!
//! 1. [`Content::mount`] measures the selected pane and subscribes to resize.
//! 2. [`Content::handle_event`] drives the drag state machine and queues
//!    resizes; a finished drag is reported as [`ContentOutcome::SwipeLeft`],
//!    [`ContentOutcome::SwipeRight`] or [`ContentOutcome::SnappedBack`].
//! 3. [`Content::tick`] re-measures once a resize burst has gone quiet, or
//!    after [`Content::request_measure`] (e.g. the pane sequence changed).
//! 4. [`Content::unmount`] drops the resize subscription and any drag.
//!
//! # Failure Modes
//!
//! - Events received while there are no panes are ignored.
//! - A failed or invalid measurement keeps the previous width; until a first
//!   width is known the layout falls back to percentages.

use std::time::Duration;

use carousel_core::event::Event;
use carousel_core::gesture::{
    DragGesture, DragState, GestureUpdate, SwipeDirection, SwipePolicy,
};
use carousel_core::rate_limit::{DEFAULT_RESIZE_DEBOUNCE, Debouncer};
use web_time::Instant;

use crate::PaneMeasure;
use crate::class_list;
use crate::layout::{Arrangement, PanePlacement, place};

/// Class of the strip container.
pub const INNER_CLASS: &str = "carousel__inner";

/// Extra class of the strip container while a drag is in progress.
pub const DRAGGING_CLASS: &str = "carousel__inner--dragging";

/// Base class of every pane.
pub const PANE_CLASS: &str = "carousel__pane";

/// Inputs owned by the root and passed down on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentProps {
    /// Number of panes.
    pub len: usize,
    /// Selected pane index.
    pub select: usize,
    /// Bumped whenever the pane sequence is replaced.
    pub revision: u64,
}

/// What an event asks the owner of the selection to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOutcome {
    /// Nothing changed.
    Ignored,
    /// The drag started or moved; the strip needs a re-render.
    Dragged,
    /// A drag ended below the threshold; panes snap back.
    SnappedBack,
    /// Leftward swipe: select the given (unwrapped) index, `select + 1`.
    SwipeLeft(isize),
    /// Rightward swipe: select the given (unwrapped) index, `select - 1`.
    SwipeRight(isize),
    /// A resize was queued behind the debouncer.
    ResizeQueued,
}

/// Everything a rendered frame depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RenderKey {
    props: ContentProps,
    drag: DragState,
    pane_width: Option<f64>,
}

/// Content strip state.
#[derive(Debug, Clone)]
pub struct Content {
    gesture: DragGesture,
    pane_width: Option<f64>,
    resize: Debouncer<()>,
    resize_subscribed: bool,
    measure_requested: bool,
    last_rendered: Option<RenderKey>,
}

impl Default for Content {
    fn default() -> Self {
        Self::new(SwipePolicy::default(), DEFAULT_RESIZE_DEBOUNCE)
    }
}

impl Content {
    /// Create a strip with the given swipe policy and resize quiet period.
    #[must_use]
    pub fn new(policy: SwipePolicy, resize_debounce: Duration) -> Self {
        Self {
            gesture: DragGesture::new(policy),
            pane_width: None,
            resize: Debouncer::new(resize_debounce),
            resize_subscribed: false,
            measure_requested: false,
            last_rendered: None,
        }
    }

    /// Measure the selected pane and start listening for resizes.
    pub fn mount(&mut self, props: ContentProps, host: &impl PaneMeasure) {
        self.resize_subscribed = true;
        self.measure(props, host);
    }

    /// Stop listening for resizes and abandon any drag.
    pub fn unmount(&mut self) {
        self.resize_subscribed = false;
        self.measure_requested = false;
        self.resize.cancel();
        self.gesture.reset();
        self.last_rendered = None;
    }

    /// Whether resize events are currently acted upon.
    #[inline]
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.resize_subscribed
    }

    /// Re-measure the selected pane. Returns `true` if the width changed.
    pub fn measure(&mut self, props: ContentProps, host: &impl PaneMeasure) -> bool {
        if props.len == 0 {
            return false;
        }
        let Some(width) = host.pane_width(props.select.min(props.len - 1)) else {
            return false;
        };
        self.set_pane_width(width)
    }

    /// Store a measured pane width. Negative or non-finite widths are
    /// rejected. Returns `true` if the stored width changed.
    pub fn set_pane_width(&mut self, width: f64) -> bool {
        if !width.is_finite() || width < 0.0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "content.measure.rejected", width);
            return false;
        }
        if self.pane_width == Some(width) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "content.measure", width, previous = ?self.pane_width);
        self.pane_width = Some(width);
        true
    }

    /// Measured pane width, if any.
    #[inline]
    #[must_use]
    pub const fn pane_width(&self) -> Option<f64> {
        self.pane_width
    }

    /// Current drag state.
    #[inline]
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        self.gesture.state()
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Swipe commit threshold in pixels for the current width.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.gesture.policy().threshold(self.pane_width)
    }

    /// Process an input event.
    pub fn handle_event(&mut self, event: &Event, now: Instant, props: ContentProps) -> ContentOutcome {
        if let Event::Resize { .. } = event {
            if !self.resize_subscribed {
                return ContentOutcome::Ignored;
            }
            self.resize.call(now, ());
            return ContentOutcome::ResizeQueued;
        }

        if props.len == 0 {
            self.gesture.reset();
            return ContentOutcome::Ignored;
        }

        match self.gesture.process(event, self.pane_width) {
            GestureUpdate::Ignored => ContentOutcome::Ignored,
            GestureUpdate::Started | GestureUpdate::Moved => ContentOutcome::Dragged,
            GestureUpdate::Ended(outcome) => match outcome.swipe {
                Some(direction @ SwipeDirection::Left) => {
                    ContentOutcome::SwipeLeft(direction.target(props.select))
                }
                Some(direction @ SwipeDirection::Right) => {
                    ContentOutcome::SwipeRight(direction.target(props.select))
                }
                None => ContentOutcome::SnappedBack,
            },
        }
    }

    /// Ask the next [`tick`](Self::tick) to measure again. Ignored while
    /// unmounted.
    pub fn request_measure(&mut self) {
        if self.resize_subscribed {
            self.measure_requested = true;
        }
    }

    /// Whether a measurement is waiting for the next tick.
    #[inline]
    #[must_use]
    pub const fn is_measure_requested(&self) -> bool {
        self.measure_requested
    }

    /// Flush a quiet resize burst or a requested measurement. Returns `true`
    /// if the width changed.
    pub fn tick(&mut self, now: Instant, props: ContentProps, host: &impl PaneMeasure) -> bool {
        let resized = self.resize.poll(now).is_some();
        if !resized && !self.measure_requested {
            return false;
        }
        self.measure_requested = false;
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "content.resize.flush", resized);
        self.measure(props, host)
    }

    /// Time until pending resize or measurement work is due.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        if self.measure_requested {
            return Some(Duration::ZERO);
        }
        self.resize.remaining(now)
    }

    fn render_key(&self, props: ContentProps) -> RenderKey {
        RenderKey {
            props,
            drag: *self.gesture.state(),
            pane_width: self.pane_width,
        }
    }

    /// Whether anything a frame depends on changed since the last [`view`](Self::view).
    #[must_use]
    pub fn needs_render(&self, props: ContentProps) -> bool {
        self.last_rendered != Some(self.render_key(props))
    }

    /// Lay the panes out and record the frame as rendered.
    ///
    /// `panes.len()` must match `props.len`; extra panes are ignored.
    pub fn view<'a, T>(
        &mut self,
        panes: &'a [T],
        props: ContentProps,
        class_name: &str,
        active_class: &str,
    ) -> ContentView<'a, T> {
        self.last_rendered = Some(self.render_key(props));

        let len = props.len.min(panes.len());
        let arrangement = Arrangement::new(len, props.select);
        let drag = self.gesture.state();
        let placements = place(&arrangement, self.pane_width, drag.delta_x());

        let panes = placements
            .into_iter()
            .map(|placement| {
                let active = placement.index == props.select;
                PaneView {
                    content: &panes[placement.index],
                    class_name: class_list([PANE_CLASS, if active { active_class } else { "" }]),
                    active,
                    hidden: !active,
                    placement,
                }
            })
            .collect();

        ContentView {
            class_name: class_list([
                class_name,
                INNER_CLASS,
                if drag.dragging { DRAGGING_CLASS } else { "" },
            ]),
            dragging: drag.dragging,
            panes,
        }
    }
}

/// Rendered strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentView<'a, T> {
    /// Space-separated class names of the container.
    pub class_name: String,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// One entry per pane, in source order.
    pub panes: Vec<PaneView<'a, T>>,
}

/// One rendered pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneView<'a, T> {
    /// Pane content.
    pub content: &'a T,
    /// Position and visibility.
    pub placement: PanePlacement,
    /// Space-separated class names.
    pub class_name: String,
    /// Whether this is the selected pane.
    pub active: bool,
    /// `aria-hidden`: every pane but the selected one.
    pub hidden: bool,
}
