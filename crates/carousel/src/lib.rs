#![forbid(unsafe_code)]

//! Carousel public facade crate.
//!
//! Re-exports the widget, its input model and the reference renderer, and
//! offers a lightweight prelude for day-to-day usage.
//!
//! ```
//! use carousel::prelude::*;
//!
//! let mut carousel = Carousel::new(["a", "b", "c"], CarouselConfig::default())
//!     .on_select(|next, prev| assert_ne!(next, prev));
//! carousel.mount(&FixedWidth(480.0));
//!
//! let release = Event::Key(KeyEvent::release(KeyCode::Left));
//! carousel.handle_event(&release, Instant::now());
//! assert_eq!(carousel.select(), 1);
//!
//! let html = render_markup(&carousel.view());
//! assert!(html.contains("carousel__inner"));
//! ```

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use carousel_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, PointerEvent, PointerEventKind,
};
pub use carousel_core::gesture::{DragState, SwipeDirection, SwipePolicy};
pub use carousel_core::geometry::Point;

// --- Widget re-exports -----------------------------------------------------

pub use carousel_widgets::carousel::{
    Carousel, CarouselOutcome, CarouselView, SelectReason, SelectionChange, TickOutcome,
    wrap_select,
};
pub use carousel_widgets::config::{CarouselConfig, CarouselConfigError};
pub use carousel_widgets::markup::{Markup, render_markup};
pub use carousel_widgets::selector::{Selector, SelectorOutcome};
pub use carousel_widgets::{FixedWidth, PaneMeasure, Unmeasured};

// --- Errors ---------------------------------------------------------------

pub use error::{Error, Result};

/// Wall-clock instant used by every time-dependent API.
pub use web_time::Instant;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Carousel, CarouselConfig, CarouselOutcome, Error, Event, FixedWidth, Instant, KeyCode,
        KeyEvent, PaneMeasure, PointerEvent, PointerEventKind, Result, SelectionChange,
        render_markup,
    };

    pub use crate::{core, widgets};
}

pub use carousel_core as core;
pub use carousel_widgets as widgets;
