#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event types the carousel components consume.
//! Hosts translate their native input (DOM events, windowing-system events,
//! test scripts) into these values and hand them to the widget together with
//! a timestamp.
//!
//! # Design Notes
//!
//! - Pointer coordinates are client-space pixels and may be fractional.
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish.
//!   The carousel root only navigates on `Release` (key-up).
//! - Only the arrow keys are named; every other key arrives as
//!   [`KeyCode::Other`] carrying the host's legacy key code.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (mouse) event over the pane container.
    Pointer(PointerEvent),

    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: f64,
        /// New viewport height in pixels.
        height: f64,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,

    /// Key-down or key-up.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a key-down event.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key-up event.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self::new(code).with_kind(KeyEventKind::Release)
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a key-up event.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self.kind, KeyEventKind::Release)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Any other key, by legacy DOM `keyCode`.
    Other(u32),
}

impl KeyCode {
    /// Map a legacy DOM `keyCode` value to a key code.
    #[must_use]
    pub const fn from_legacy_code(code: u32) -> Self {
        match code {
            37 => Self::Left,
            39 => Self::Right,
            other => Self::Other(other),
        }
    }
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key was released.
    Release,
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Client-space X coordinate in pixels.
    pub x: f64,

    /// Client-space Y coordinate in pixels.
    pub y: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down. Any button starts a drag.
    Down(MouseButton),

    /// Pointer moved, with or without a button held.
    Moved,

    /// Button released.
    Up(MouseButton),

    /// Pointer left the pane container.
    Leave,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button.
    Left,

    /// Any other button, by DOM `MouseEvent.button` index.
    Other(u8),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Left,
            other => Self::Other(other),
        }
    }
}
