#![forbid(unsafe_code)]

//! Geometric primitives.

use std::ops::Sub;

/// A point (or displacement) in client-space pixels.
///
/// Origin is the top-left of the viewport; coordinates may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[inline]
    #[must_use]
    pub fn offset_from(self, origin: Self) -> Self {
        self - origin
    }

    /// Whether both coordinates are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
