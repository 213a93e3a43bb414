#![forbid(unsafe_code)]

//! Session scripts.
//!
//! A script names the panes, the width the host reports for them, and a list
//! of steps. Each step waits `after_ms` on the simulated clock, runs due
//! rate-limited work, then performs one user action.
//!
//! ```json
//! {
//!   "panes": ["Alpha", "Bravo", "Charlie"],
//!   "pane_width": 500,
//!   "steps": [
//!     { "action": { "type": "key", "key": "right" } },
//!     { "after_ms": 200, "action": { "type": "drag", "from_x": 300, "to_x": 500 } }
//!   ]
//! }
//! ```

use std::path::Path;

use carousel::{Error, Event, KeyCode, KeyEvent, MouseButton, PointerEvent, PointerEventKind, Result};
use serde::{Deserialize, Serialize};

/// Script shipped with the binary and used when no `--script` is given.
pub const DEFAULT_SESSION: &str = include_str!("../data/default_session.json");

/// Number of intermediate pointer moves a drag is split into.
const DEFAULT_DRAG_MOVES: u32 = 4;

/// A recorded input session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Pane labels, in order.
    pub panes: Vec<String>,
    /// Width the host reports for every pane; `None` keeps the percentage
    /// fallback layout.
    #[serde(default)]
    pub pane_width: Option<f64>,
    /// Steps to replay.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Milliseconds of simulated time that pass before the action.
    #[serde(default)]
    pub after_ms: u64,
    /// What the user does.
    pub action: Action,
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Press and release an arrow key.
    Key { key: ArrowKey },
    /// Press and release a key given by its legacy numeric key code.
    KeyCode { code: u32 },
    /// Press at `from_x`, move to `to_x`, then end the gesture.
    ///
    /// `button` is the DOM button index; 0 is the primary button.
    Drag {
        from_x: f64,
        to_x: f64,
        #[serde(default)]
        end: DragEnd,
        #[serde(default = "default_drag_moves")]
        moves: u32,
        #[serde(default)]
        button: u8,
    },
    /// Click indicator `index`.
    Click { index: usize },
    /// Ask the widget to select `index` directly.
    Select { index: isize },
    /// Resize the viewport; `pane_width` is what the host reports afterwards.
    Resize {
        width: f64,
        height: f64,
        #[serde(default)]
        pane_width: Option<f64>,
    },
    /// Focus moves away from the widget.
    Blur,
    /// Do nothing; only time passes.
    Wait,
}

/// Arrow keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowKey {
    Left,
    Right,
}

/// How a scripted drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEnd {
    /// Pointer released over the widget.
    #[default]
    Up,
    /// Pointer left the widget.
    Leave,
    /// Widget lost focus mid-drag.
    Blur,
}

fn default_drag_moves() -> u32 {
    DEFAULT_DRAG_MOVES
}

impl Script {
    /// Parse a script from JSON text and check it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let script: Self =
            serde_json::from_str(s).map_err(|err| Error::Input(format!("script: {err}")))?;
        script.check()?;
        Ok(script)
    }

    /// Read and parse a script file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// The script shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(DEFAULT_SESSION)
    }

    fn check(&self) -> Result<()> {
        let widths = self.steps.iter().filter_map(|step| match step.action {
            Action::Resize { pane_width, .. } => pane_width,
            _ => None,
        });
        for width in self.pane_width.into_iter().chain(widths) {
            if !width.is_finite() || width < 0.0 {
                return Err(Error::Input(format!("pane width must be >= 0, got {width}")));
            }
        }
        Ok(())
    }
}

impl Action {
    /// Expand the action into the events a host would forward.
    ///
    /// Clicks and direct selections are not input events and expand to
    /// nothing; the replayer calls the widget API for them.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        match *self {
            Self::Key { key } => key_stroke(match key {
                ArrowKey::Left => KeyCode::Left,
                ArrowKey::Right => KeyCode::Right,
            }),
            Self::KeyCode { code } => key_stroke(KeyCode::from_legacy_code(code)),
            Self::Drag {
                from_x,
                to_x,
                end,
                moves,
                button,
            } => {
                let button = MouseButton::from_index(button);
                let moves = moves.max(1);
                let mut events = Vec::with_capacity(moves as usize + 2);
                events.push(pointer(PointerEventKind::Down(button), from_x));
                for step in 1..=moves {
                    let x = from_x + (to_x - from_x) * f64::from(step) / f64::from(moves);
                    events.push(pointer(PointerEventKind::Moved, x));
                }
                events.push(match end {
                    DragEnd::Up => pointer(PointerEventKind::Up(button), to_x),
                    DragEnd::Leave => pointer(PointerEventKind::Leave, to_x),
                    DragEnd::Blur => Event::Focus(false),
                });
                events
            }
            Self::Resize { width, height, .. } => vec![Event::Resize { width, height }],
            Self::Blur => vec![Event::Focus(false)],
            Self::Click { .. } | Self::Select { .. } | Self::Wait => Vec::new(),
        }
    }
}

fn key_stroke(code: KeyCode) -> Vec<Event> {
    vec![
        Event::Key(KeyEvent::new(code)),
        Event::Key(KeyEvent::release(code)),
    ]
}

fn pointer(kind: PointerEventKind, x: f64) -> Event {
    Event::Pointer(PointerEvent::new(kind, x, 0.0))
}
