#![forbid(unsafe_code)]

//! Carousel components: selector, content strip, and the root widget.
//!
//! The components never draw anything themselves. Each produces a view model
//! (`SelectorView`, `ContentView`, `CarouselView`) that a host renders, and
//! consumes [`carousel_core::event::Event`] values the host forwards.
//! [`markup`] contains a reference renderer that turns a view into an HTML
//! fragment.

pub mod carousel;
pub mod config;
pub mod content;
pub mod layout;
pub mod markup;
pub mod selector;

/// Host-side measurement of rendered panes.
///
/// The content strip measures the selected pane on mount and after a
/// debounced resize. Returning `None` means the pane has not been laid out
/// yet; the strip keeps its previous width (or the percentage fallback).
pub trait PaneMeasure {
    /// Rendered width of pane `index`, in pixels.
    fn pane_width(&self, index: usize) -> Option<f64>;
}

/// A host where every pane has the same known width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidth(pub f64);

impl PaneMeasure for FixedWidth {
    fn pane_width(&self, _index: usize) -> Option<f64> {
        Some(self.0)
    }
}

/// A host that has not laid anything out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unmeasured;

impl PaneMeasure for Unmeasured {
    fn pane_width(&self, _index: usize) -> Option<f64> {
        None
    }
}

impl<F> PaneMeasure for F
where
    F: Fn(usize) -> Option<f64>,
{
    fn pane_width(&self, index: usize) -> Option<f64> {
        self(index)
    }
}

/// Joins CSS class names, skipping empty ones.
pub(crate) fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for class in classes.into_iter().map(str::trim).filter(|c| !c.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
