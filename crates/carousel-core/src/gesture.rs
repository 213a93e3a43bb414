#![forbid(unsafe_code)]

//! Drag gesture recognition: turns pointer sequences into swipe decisions.
//!
//! [`DragGesture`] is a stateful processor that tracks a single
//! pointer-down → move → up/leave interaction over the pane container and,
//! when the interaction ends, asks its [`SwipePolicy`] whether the drag was
//! long enough to commit a selection change.
//!
//! # State Machine
//!
//! ```text
//!            Down                 Moved (delta = current - start)
//!   Idle ───────────▶ Dragging ◀──────┐
//!    ▲                   │  └─────────┘
//!    └───────────────────┘
//!      Up / Leave / Focus(false): decide swipe, then reset
//! ```
//!
//! # Invariants
//!
//! 1. While `Idle`, `delta == (0, 0)` and `start == (0, 0)`.
//! 2. Moves, ups and leaves received while `Idle` are ignored.
//! 3. Exactly one [`GestureUpdate::Ended`] is produced per down → up cycle.
//! 4. The state is reset after every ended gesture, whatever the decision.
//!
//! # Swipe decision
//!
//! `threshold = pane_width * ratio`. A drag commits when `|delta_x|` is
//! strictly greater than the threshold. A `delta_x > -1` drag is treated as
//! rightward (request the previous pane); anything further left requests the
//! next pane. The `> -1` boundary means a zero delta counts as rightward;
//! it can only matter when the threshold is below one pixel.

use crate::event::{Event, PointerEvent, PointerEventKind};
use crate::geometry::Point;

/// Fraction of the pane width a drag must exceed to commit (default: 0.2).
pub const DEFAULT_SWIPE_RATIO: f64 = 0.2;

// ---------------------------------------------------------------------------
// Swipe policy
// ---------------------------------------------------------------------------

/// Direction of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Content dragged toward the left: advance to the next pane.
    Left,
    /// Content dragged toward the right: go back to the previous pane.
    Right,
}

impl SwipeDirection {
    /// Index step requested by this swipe.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Left => 1,
            Self::Right => -1,
        }
    }

    /// Target index relative to `select`. May be out of range; the owner of
    /// the selection wraps it.
    #[must_use]
    pub const fn target(self, select: usize) -> isize {
        select as isize + self.step()
    }
}

/// Commit-or-cancel rule for a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipePolicy {
    /// Fraction of the pane width the horizontal delta must exceed.
    pub ratio: f64,
}

impl Default for SwipePolicy {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_SWIPE_RATIO,
        }
    }
}

impl SwipePolicy {
    /// Create a policy with a custom ratio.
    #[must_use]
    pub const fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// Pixel threshold for a pane of the given width.
    ///
    /// An unknown, negative or non-finite width yields a zero threshold, as
    /// does a negative or non-finite ratio. The threshold is never negative.
    #[must_use]
    pub fn threshold(&self, pane_width: Option<f64>) -> f64 {
        let width = pane_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(0.0);
        let ratio = if self.ratio.is_finite() && self.ratio > 0.0 {
            self.ratio
        } else {
            0.0
        };
        width * ratio
    }

    /// Decide whether a horizontal drag of `delta_x` commits a swipe.
    #[must_use]
    pub fn decide(&self, delta_x: f64, pane_width: Option<f64>) -> Option<SwipeDirection> {
        if delta_x.abs() <= self.threshold(pane_width) {
            return None;
        }
        if delta_x > -1.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }
}

// ---------------------------------------------------------------------------
// Drag state
// ---------------------------------------------------------------------------

/// Snapshot of the transient drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether a pointer button is held over the container.
    pub dragging: bool,
    /// Pointer position at the pointer-down.
    pub start: Point,
    /// Current pointer position minus `start`.
    pub delta: Point,
}

impl DragState {
    /// The idle state.
    pub const IDLE: Self = Self {
        dragging: false,
        start: Point::ORIGIN,
        delta: Point::ORIGIN,
    };

    /// Horizontal delta in pixels.
    #[inline]
    #[must_use]
    pub const fn delta_x(&self) -> f64 {
        self.delta.x
    }

    /// Vertical delta in pixels.
    #[inline]
    #[must_use]
    pub const fn delta_y(&self) -> f64 {
        self.delta.y
    }

    /// Whether this is the idle state.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// How a drag came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Pointer button released over the container.
    Released,
    /// Pointer left the container while dragging.
    Left,
    /// Focus was lost while dragging.
    FocusLost,
}

/// Result of a finished drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOutcome {
    /// Final displacement of the drag.
    pub delta: Point,
    /// Committed swipe, or `None` to snap back.
    pub swipe: Option<SwipeDirection>,
    /// What ended the drag.
    pub reason: EndReason,
}

/// What processing an event did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// The event did not affect the gesture.
    Ignored,
    /// A drag started.
    Started,
    /// The drag delta changed.
    Moved,
    /// The drag ended and the state was reset.
    Ended(GestureOutcome),
}

// ---------------------------------------------------------------------------
// DragGesture
// ---------------------------------------------------------------------------

/// Pointer-drag state machine with an attached swipe policy.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
    policy: SwipePolicy,
}

impl DragGesture {
    /// Create a gesture tracker with the given policy.
    #[must_use]
    pub fn new(policy: SwipePolicy) -> Self {
        Self {
            state: DragState::IDLE,
            policy,
        }
    }

    /// Process an event. `pane_width` is used only when the drag ends.
    pub fn process(&mut self, event: &Event, pane_width: Option<f64>) -> GestureUpdate {
        match event {
            Event::Pointer(pointer) => self.process_pointer(pointer, pane_width),
            Event::Focus(false) => self.finish(EndReason::FocusLost, pane_width),
            _ => GestureUpdate::Ignored,
        }
    }

    /// Process a pointer event.
    pub fn process_pointer(
        &mut self,
        pointer: &PointerEvent,
        pane_width: Option<f64>,
    ) -> GestureUpdate {
        let pos = Point::new(pointer.x, pointer.y);
        match pointer.kind {
            PointerEventKind::Down(_) => {
                self.press(pos);
                GestureUpdate::Started
            }
            PointerEventKind::Moved => {
                if self.motion(pos) {
                    GestureUpdate::Moved
                } else {
                    GestureUpdate::Ignored
                }
            }
            PointerEventKind::Up(_) => self.finish(EndReason::Released, pane_width),
            PointerEventKind::Leave => self.finish(EndReason::Left, pane_width),
        }
    }

    /// Begin a drag at `pos`. A second press restarts the drag from `pos`.
    pub fn press(&mut self, pos: Point) {
        self.state = DragState {
            dragging: true,
            start: pos,
            delta: Point::ORIGIN,
        };
        #[cfg(feature = "tracing")]
        crate::trace!(message = "gesture.start", x = pos.x, y = pos.y);
    }

    /// Update the drag delta. Returns `false` when idle or unchanged.
    pub fn motion(&mut self, pos: Point) -> bool {
        if !self.state.dragging {
            return false;
        }
        let delta = pos.offset_from(self.state.start);
        if delta == self.state.delta {
            return false;
        }
        self.state.delta = delta;
        true
    }

    /// End the drag, decide the swipe, and reset.
    ///
    /// Returns [`GestureUpdate::Ignored`] when no drag is in progress.
    pub fn finish(&mut self, reason: EndReason, pane_width: Option<f64>) -> GestureUpdate {
        if !self.state.dragging {
            return GestureUpdate::Ignored;
        }
        let delta = self.state.delta;
        let swipe = self.policy.decide(delta.x, pane_width);
        self.reset();

        #[cfg(feature = "tracing")]
        crate::debug!(
            message = "gesture.end",
            reason = ?reason,
            delta_x = delta.x,
            threshold = self.policy.threshold(pane_width),
            swipe = ?swipe
        );

        GestureUpdate::Ended(GestureOutcome {
            delta,
            swipe,
            reason,
        })
    }

    /// Return to idle without deciding anything.
    pub fn reset(&mut self) {
        self.state = DragState::IDLE;
    }

    /// Current drag state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// The swipe policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> &SwipePolicy {
        &self.policy
    }

    /// Replace the swipe policy.
    pub fn set_policy(&mut self, policy: SwipePolicy) {
        self.policy = policy;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
