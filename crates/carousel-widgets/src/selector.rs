#![forbid(unsafe_code)]

//! Position indicator.
//!
//! A row of clickable markers, one per pane, with the marker of the selected
//! pane highlighted. The selector is a pure function of its inputs: it holds
//! no state and reports clicks back to its owner as [`SelectorOutcome`].

use crate::class_list;

/// Base class of every indicator item.
pub const ITEM_CLASS: &str = "carousel-selector__item";

/// Class of the indicator list.
pub const LIST_CLASS: &str = "carousel-selector";

/// Default class applied to the selected item.
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// What a click on the selector asks its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// The click did not land on an item.
    Ignored,
    /// Jump to the given index.
    Clicked(usize),
}

/// Indicator row widget.
///
/// Built either from a bare count ([`Selector::new`]) or from explicit
/// indicator contents ([`Selector::with_indicators`]). When explicit
/// indicators are present their count wins over the bare length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'a, I = ()> {
    indicators: &'a [I],
    length: usize,
    select: usize,
    active_class: &'a str,
}

impl<'a> Selector<'a> {
    /// Create a selector with `length` content-less items.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            indicators: &[],
            length,
            select: 0,
            active_class: DEFAULT_ACTIVE_CLASS,
        }
    }
}

impl<'a, I> Selector<'a, I> {
    /// Create a selector whose items carry the given contents.
    #[must_use]
    pub fn with_indicators(indicators: &'a [I]) -> Self {
        Self {
            indicators,
            length: indicators.len(),
            select: 0,
            active_class: DEFAULT_ACTIVE_CLASS,
        }
    }

    /// Set the selected index.
    #[must_use]
    pub fn select(mut self, select: usize) -> Self {
        self.select = select;
        self
    }

    /// Set the class applied to the selected item.
    #[must_use]
    pub fn active_class(mut self, active_class: &'a str) -> Self {
        self.active_class = active_class;
        self
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.indicators.is_empty() {
            self.length
        } else {
            self.indicators.len()
        }
    }

    /// Whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.select
    }

    /// Handle a click on item `index`.
    #[must_use]
    pub fn click(&self, index: usize) -> SelectorOutcome {
        if index < self.len() {
            SelectorOutcome::Clicked(index)
        } else {
            SelectorOutcome::Ignored
        }
    }

    /// Build the view of every item.
    #[must_use]
    pub fn view(&self) -> SelectorView<'a, I> {
        let items = (0..self.len())
            .map(|index| {
                let selected = index == self.select;
                SelectorItemView {
                    index,
                    selected,
                    class_name: class_list([
                        ITEM_CLASS,
                        if selected { self.active_class } else { "" },
                    ]),
                    content: self.indicators.get(index),
                }
            })
            .collect();
        SelectorView { items }
    }

    /// Whether switching to `next` changes anything visible.
    #[must_use]
    pub fn should_update(&self, next: &Self) -> bool {
        self.select != next.select
            || self.len() != next.len()
            || !self.same_indicators(next)
            || self.active_class != next.active_class
    }

    /// Identity (not equality) of the indicator slices.
    fn same_indicators(&self, next: &Self) -> bool {
        match (self.indicators.is_empty(), next.indicators.is_empty()) {
            (true, true) => true,
            (false, false) => std::ptr::eq(self.indicators, next.indicators),
            _ => false,
        }
    }
}

/// Rendered selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView<'a, I = ()> {
    /// One entry per item, in index order.
    pub items: Vec<SelectorItemView<'a, I>>,
}

impl<I> SelectorView<'_, I> {
    /// Index of the selected item, if any item is selected.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.items.iter().find(|item| item.selected).map(|i| i.index)
    }
}

/// One indicator item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItemView<'a, I = ()> {
    /// Item index.
    pub index: usize,
    /// Whether this is the selected item (`aria-selected`).
    pub selected: bool,
    /// Space-separated class names.
    pub class_name: String,
    /// Indicator content; `None` for a count-only selector.
    pub content: Option<&'a I>,
}
