#![forbid(unsafe_code)]

//! Core: input events, drag gestures, and rate limiting for the carousel.
//!
//! # Role in the carousel
//! `carousel-core` is the input layer. It owns the canonical event types the
//! widgets consume, the pointer-drag state machine that turns a gesture into
//! a swipe decision, and the timer-free debounce/throttle primitives used for
//! resize and keyboard handling.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, pointer, resize, focus).
//! - **DragGesture**: `Idle`/`Dragging` state machine with per-gesture deltas.
//! - **SwipePolicy**: commit-or-cancel decision from a finished drag.
//! - **Debouncer / Throttle**: explicit-clock rate limiters.
//!
//! # How it fits in the system
//! `carousel-widgets` feeds `Event` values into its components and drives the
//! rate limiters from the host's `tick`. Nothing in this crate owns a timer or
//! a thread; every time-dependent call takes an [`Instant`](web_time::Instant).

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod rate_limit;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
