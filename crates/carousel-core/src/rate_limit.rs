#![forbid(unsafe_code)]

//! Explicit-clock rate limiters.
//!
//! The carousel uses two disciplines for two different event floods:
//!
//! - [`Debouncer`]: only the last event of a burst matters, delivered once the
//!   input has been quiet for the configured delay (window resize, where only
//!   the final stable width is interesting).
//! - [`Throttle`]: at most one action per interval, but a sustained burst
//!   still produces periodic actions (key repeat navigation). The first call
//!   in a quiet period fires immediately; calls inside the interval collapse
//!   into one trailing call carrying the latest value.
//!
//! Neither type owns a timer. The host passes `now` into every call and
//! polls pending work from its tick. This keeps behavior deterministic under
//! test and portable to hosts without threads.
//!
//! ```
//! use std::time::Duration;
//! use carousel_core::rate_limit::Throttle;
//! use web_time::Instant;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(150));
//! let t0 = Instant::now();
//! assert_eq!(throttle.call(t0, 'a'), Some('a'));
//! assert_eq!(throttle.call(t0 + Duration::from_millis(10), 'b'), None);
//! assert_eq!(throttle.call(t0 + Duration::from_millis(20), 'c'), None);
//! assert_eq!(throttle.poll(t0 + Duration::from_millis(150)), Some('c'));
//! ```

use std::time::Duration;

use web_time::Instant;

/// Default quiet period before a resize is acted upon (300ms).
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default minimum spacing between keyboard navigation steps (150ms).
pub const DEFAULT_KEY_THROTTLE: Duration = Duration::from_millis(150);

/// Elapsed time from `earlier` to `now`, saturating at zero.
fn elapsed(now: Instant, earlier: Instant) -> Duration {
    now.checked_duration_since(earlier).unwrap_or(Duration::ZERO)
}

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Trailing-edge debouncer: latest value wins, delivered after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an event. Replaces any pending value and restarts the quiet period.
    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some((value, now));
    }

    /// Deliver the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, at) = self.pending.as_ref()?;
        if elapsed(now, *at) < self.delay {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Time left until the pending value would be delivered.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.delay.saturating_sub(elapsed(now, *at)))
    }

    /// Whether a value is waiting.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The configured quiet period.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

// ---------------------------------------------------------------------------
// Throttle
// ---------------------------------------------------------------------------

/// Leading-edge throttle with a single trailing call.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_fired: Option<Instant>,
    trailing: Option<T>,
}

impl<T> Throttle<T> {
    /// Create a throttle with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            trailing: None,
        }
    }

    /// Submit a value.
    ///
    /// Returns the value back if it may run now, superseding any overdue
    /// trailing value. Otherwise it becomes the trailing value (replacing any
    /// earlier one) and `None` is returned.
    pub fn call(&mut self, now: Instant, value: T) -> Option<T> {
        if self.ready(now) {
            self.trailing = None;
            self.last_fired = Some(now);
            return Some(value);
        }
        self.trailing = Some(value);
        None
    }

    /// Deliver the trailing value once the interval since the last run has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.trailing.is_none() || !self.ready(now) {
            return None;
        }
        self.last_fired = Some(now);
        self.trailing.take()
    }

    /// Time left until the trailing value may run.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.trailing.as_ref()?;
        Some(match self.last_fired {
            Some(at) => self.interval.saturating_sub(elapsed(now, at)),
            None => Duration::ZERO,
        })
    }

    /// Whether a trailing value is waiting.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.trailing.is_some()
    }

    /// Forget the trailing value and the last run time.
    pub fn reset(&mut self) {
        self.last_fired = None;
        self.trailing = None;
    }

    /// The configured interval.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    fn ready(&self, now: Instant) -> bool {
        self.last_fired
            .is_none_or(|at| elapsed(now, at) >= self.interval)
    }
}
