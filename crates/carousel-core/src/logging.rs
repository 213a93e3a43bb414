#![forbid(unsafe_code)]

//! Structured logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates can log through `carousel_core::debug!` and
//! friends without naming `tracing` themselves. Without the feature the
//! module is empty and call sites are compiled out behind
//! `#[cfg(feature = "tracing")]`.
//!
//! Span and field names follow a `component.action` convention, e.g.
//! `gesture.end`, `carousel.select`, `content.measure`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
