#![forbid(unsafe_code)]

//! Root carousel widget.
//!
//! [`Carousel`] owns the pane sequence and the single authoritative
//! selection. Keyboard, selector clicks and swipes all funnel through
//! [`Carousel::update_select`], which wraps out-of-range targets around the
//! ends and notifies the `on_select` callback right after a change commits.
//!
//! # Invariants
//!
//! 1. `select() < len()` whenever the carousel has panes; `select() == 0`
//!    otherwise.
//! 2. `on_select(next, prev)` fires exactly once per committed change and
//!    never for a no-op update.
//! 3. Keyboard navigation reacts to key-up only and runs at most once per
//!    throttle interval; a burst leaves one trailing step for [`Carousel::tick`].
//!
//! # Example
//!
//! ```
//! use carousel_core::event::{Event, KeyCode, KeyEvent};
//! use carousel_widgets::FixedWidth;
//! use carousel_widgets::carousel::{Carousel, CarouselOutcome};
//! use carousel_widgets::config::CarouselConfig;
//! use web_time::Instant;
//!
//! let mut carousel = Carousel::new(["a", "b", "c", "d", "e"], CarouselConfig::default());
//! carousel.mount(&FixedWidth(640.0));
//! assert_eq!(carousel.select(), 2);
//!
//! let right = Event::Key(KeyEvent::release(KeyCode::Right));
//! let outcome = carousel.handle_event(&right, Instant::now());
//! assert!(matches!(outcome, CarouselOutcome::Selected(change) if change.next == 3));
//! ```

use std::fmt;
use std::time::Duration;

use carousel_core::event::{Event, KeyCode, KeyEvent};
use carousel_core::gesture::SwipeDirection;
use carousel_core::rate_limit::Throttle;
use web_time::Instant;

use crate::PaneMeasure;
use crate::config::CarouselConfig;
use crate::content::{Content, ContentOutcome, ContentProps, ContentView};
use crate::selector::{Selector, SelectorOutcome, SelectorView};

/// Wrap `target` into `0..len`: below zero goes to the last index, past the
/// end goes to the first. Returns 0 for an empty sequence.
#[must_use]
pub fn wrap_select(target: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if target < 0 {
        last
    } else if target as usize > last {
        0
    } else {
        target as usize
    }
}

/// Why the selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectReason {
    /// Left/Right arrow key.
    Keyboard,
    /// A committed drag.
    Swipe(SwipeDirection),
    /// Click on an indicator.
    Selector,
    /// Direct call to [`Carousel::update_select`] and friends.
    Api,
    /// The pane sequence was replaced and the old selection fell out of range.
    PanesReplaced,
}

/// A committed selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// New selection.
    pub next: usize,
    /// Previous selection.
    pub prev: usize,
    /// What caused the change.
    pub reason: SelectReason,
}

/// Result of feeding an event to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselOutcome {
    /// Nothing changed.
    Ignored,
    /// Visual state changed (drag moved or snapped back); re-render.
    Redraw,
    /// The selection changed.
    Selected(SelectionChange),
    /// Work was queued behind a rate limiter; call [`Carousel::tick`] later.
    Deferred,
}

/// Result of [`Carousel::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Selection change from a trailing keyboard step.
    pub selection: Option<SelectionChange>,
    /// Whether the pane width was re-measured to a new value.
    pub remeasured: bool,
}

impl TickOutcome {
    /// Whether anything visible changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.selection.is_some() || self.remeasured
    }
}

type SelectCallback = Box<dyn FnMut(usize, usize)>;

/// Root carousel widget.
pub struct Carousel<T> {
    panes: Vec<T>,
    revision: u64,
    select: usize,
    config: CarouselConfig,
    content: Content,
    keys: Throttle<isize>,
    on_select: Option<SelectCallback>,
    /// `(len, select)` of the last rendered selector.
    rendered_selector: Option<(usize, usize)>,
}

impl<T: fmt::Debug> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("panes", &self.panes)
            .field("select", &self.select)
            .field("dragging", &self.content.is_dragging())
            .field("pane_width", &self.content.pane_width())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl<T> Carousel<T> {
    /// Create a carousel over `panes`.
    ///
    /// The initial selection is `config.initial_select` wrapped into range.
    #[must_use]
    pub fn new(panes: impl IntoIterator<Item = T>, config: CarouselConfig) -> Self {
        let panes: Vec<T> = panes.into_iter().collect();
        let select = wrap_select(to_target(config.initial_select), panes.len());
        Self {
            content: Content::new(config.swipe_policy(), config.resize_debounce()),
            keys: Throttle::new(config.key_throttle()),
            panes,
            revision: 0,
            select,
            config,
            on_select: None,
            rendered_selector: None,
        }
    }

    /// Register the selection-changed callback, called as `(next, prev)`.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Replace the selection-changed callback.
    pub fn set_on_select(&mut self, callback: impl FnMut(usize, usize) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Current selection.
    #[inline]
    #[must_use]
    pub const fn select(&self) -> usize {
        self.select
    }

    /// Number of panes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// Whether there are no panes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// The panes, in source order.
    #[must_use]
    pub fn panes(&self) -> &[T] {
        &self.panes
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The content strip state (drag state, pane width).
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    fn props(&self) -> ContentProps {
        ContentProps {
            len: self.panes.len(),
            select: self.select,
            revision: self.revision,
        }
    }

    /// The single mutation point for the selection.
    ///
    /// Wraps `target` around the ends. Returns the change if the selection
    /// moved; the `on_select` callback has already run by then.
    pub fn update_select(&mut self, target: isize) -> Option<SelectionChange> {
        self.commit(target, SelectReason::Api)
    }

    /// Select the next pane, wrapping past the end.
    pub fn select_next(&mut self) -> Option<SelectionChange> {
        self.commit(to_target(self.select) + 1, SelectReason::Api)
    }

    /// Select the previous pane, wrapping past the start.
    pub fn select_previous(&mut self) -> Option<SelectionChange> {
        self.commit(to_target(self.select) - 1, SelectReason::Api)
    }

    /// Handle a click on selector item `index`.
    pub fn click_selector(&mut self, index: usize) -> Option<SelectionChange> {
        let outcome = self.selector().click(index);
        match outcome {
            SelectorOutcome::Clicked(index) => self.commit(to_target(index), SelectReason::Selector),
            SelectorOutcome::Ignored => None,
        }
    }

    /// Replace the pane sequence.
    ///
    /// A selection that falls out of range is wrapped like any other target.
    /// The pane width is measured again on the next [`tick`](Self::tick).
    pub fn set_panes(&mut self, panes: impl IntoIterator<Item = T>) -> Option<SelectionChange> {
        self.panes = panes.into_iter().collect();
        self.revision = self.revision.wrapping_add(1);
        self.content.request_measure();
        if self.panes.is_empty() {
            self.select = 0;
            return None;
        }
        self.commit(to_target(self.select), SelectReason::PanesReplaced)
    }

    fn commit(&mut self, target: isize, reason: SelectReason) -> Option<SelectionChange> {
        if self.panes.is_empty() {
            return None;
        }
        let prev = self.select;
        let next = wrap_select(target, self.panes.len());
        if next == prev {
            return None;
        }
        self.select = next;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.select",
            from = prev,
            to = next,
            requested = target,
            reason = ?reason
        );

        if let Some(callback) = self.on_select.as_mut() {
            callback(next, prev);
        }
        Some(SelectionChange { next, prev, reason })
    }

    /// Measure the panes and start listening for resizes.
    pub fn mount(&mut self, host: &impl PaneMeasure) {
        let props = self.props();
        self.content.mount(props, host);
    }

    /// Stop listening for resizes; drops queued keyboard steps and any drag.
    pub fn unmount(&mut self) {
        self.content.unmount();
        self.keys.reset();
        self.rendered_selector = None;
    }

    /// Process an input event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> CarouselOutcome {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            _ => {
                let props = self.props();
                match self.content.handle_event(event, now, props) {
                    ContentOutcome::Ignored => CarouselOutcome::Ignored,
                    ContentOutcome::Dragged | ContentOutcome::SnappedBack => {
                        CarouselOutcome::Redraw
                    }
                    ContentOutcome::ResizeQueued => CarouselOutcome::Deferred,
                    ContentOutcome::SwipeLeft(target) => {
                        self.swiped(target, SwipeDirection::Left)
                    }
                    ContentOutcome::SwipeRight(target) => {
                        self.swiped(target, SwipeDirection::Right)
                    }
                }
            }
        }
    }

    fn swiped(&mut self, target: isize, direction: SwipeDirection) -> CarouselOutcome {
        match self.commit(target, SelectReason::Swipe(direction)) {
            Some(change) => CarouselOutcome::Selected(change),
            // One pane: the swipe wraps onto itself, but the drag still reset.
            None => CarouselOutcome::Redraw,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> CarouselOutcome {
        if !key.is_release() || self.panes.is_empty() {
            return CarouselOutcome::Ignored;
        }
        let step = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            _ => return CarouselOutcome::Ignored,
        };
        match self.keys.call(now, step) {
            Some(step) => self.key_step(step),
            None => CarouselOutcome::Deferred,
        }
    }

    fn key_step(&mut self, step: isize) -> CarouselOutcome {
        match self.commit(to_target(self.select) + step, SelectReason::Keyboard) {
            Some(change) => CarouselOutcome::Selected(change),
            None => CarouselOutcome::Ignored,
        }
    }

    /// Run rate-limited work that has come due.
    pub fn tick(&mut self, now: Instant, host: &impl PaneMeasure) -> TickOutcome {
        let selection = match self.keys.poll(now) {
            Some(step) => match self.key_step(step) {
                CarouselOutcome::Selected(change) => Some(change),
                _ => None,
            },
            None => None,
        };
        let props = self.props();
        let remeasured = self.content.tick(now, props, host);
        TickOutcome {
            selection,
            remeasured,
        }
    }

    /// Time until the next rate-limited work is due, if any is pending.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match (self.keys.remaining(now), self.content.next_deadline(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether anything the strip or the selector shows changed since the
    /// last [`view`](Self::view).
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.content.needs_render(self.props()) || self.selector_needs_render()
    }

    /// Whether the selector changed since the last [`view`](Self::view).
    ///
    /// Hosts that draw the indicator row separately from the strip can use
    /// this to skip it while a drag only moves the panes.
    #[must_use]
    pub fn selector_needs_render(&self) -> bool {
        match self.rendered_selector {
            Some((len, select)) => Selector::new(len)
                .select(select)
                .active_class(&self.config.active_class)
                .should_update(&self.selector()),
            None => true,
        }
    }

    fn selector(&self) -> Selector<'_> {
        Selector::new(self.panes.len())
            .select(self.select)
            .active_class(&self.config.active_class)
    }

    /// Render the strip and the selector as siblings.
    pub fn view(&mut self) -> CarouselView<'_, T> {
        let props = self.props();
        self.rendered_selector = Some((props.len, props.select));
        let content = self
            .content
            .view(&self.panes, props, "", &self.config.active_class);
        let selector = self.selector().view();
        CarouselView {
            class_name: &self.config.class_name,
            content,
            selector,
        }
    }
}

fn to_target(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Rendered carousel: the strip and the selector under one wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, T> {
    /// Class of the root wrapper.
    pub class_name: &'a str,
    /// The pane strip.
    pub content: ContentView<'a, T>,
    /// The indicator row.
    pub selector: SelectorView<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedWidth;
    use carousel_core::event::{MouseButton, PointerEvent, PointerEventKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    const PANES: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn carousel() -> Carousel<&'static str> {
        let mut c = Carousel::new(PANES, CarouselConfig::default());
        c.mount(&FixedWidth(500.0));
        c
    }

    fn key_up(code: KeyCode) -> Event {
        Event::Key(KeyEvent::release(code))
    }

    fn pointer(kind: PointerEventKind, x: f64) -> Event {
        Event::Pointer(PointerEvent::new(kind, x, 0.0))
    }

    #[test]
    fn wrap_rules() {
        for len in 1..8usize {
            assert_eq!(wrap_select(-1, len), len - 1);
            assert_eq!(wrap_select(len as isize, len), 0);
            for k in 0..len {
                assert_eq!(wrap_select(k as isize, len), k);
            }
        }
        assert_eq!(wrap_select(-5, 0), 0);
        assert_eq!(wrap_select(3, 0), 0);
    }

    #[test]
    fn default_selection_is_two() {
        assert_eq!(carousel().select(), 2);
    }

    #[test]
    fn initial_select_is_wrapped() {
        let c = Carousel::new(["a", "b"], CarouselConfig::default());
        assert_eq!(c.select(), 0);
        let empty: Carousel<u8> = Carousel::new([], CarouselConfig::default());
        assert_eq!(empty.select(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn update_select_wraps_and_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut c = carousel().on_select(move |next, prev| sink.borrow_mut().push((next, prev)));

        assert_eq!(c.update_select(-1).map(|ch| ch.next), Some(4));
        assert_eq!(c.update_select(5).map(|ch| ch.next), Some(0));
        assert_eq!(c.update_select(0), None);
        assert_eq!(c.update_select(3).map(|ch| ch.prev), Some(0));
        assert_eq!(*log.borrow(), vec![(4, 2), (0, 4), (3, 0)]);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut c = carousel();
        c.update_select(4);
        assert_eq!(c.select_next().map(|ch| ch.next), Some(0));
        assert_eq!(c.select_previous().map(|ch| ch.next), Some(4));
    }

    #[test]
    fn key_up_navigates() {
        let mut c = carousel();
        let t0 = Instant::now();
        let outcome = c.handle_event(&key_up(KeyCode::Left), t0);
        assert!(matches!(
            outcome,
            CarouselOutcome::Selected(SelectionChange {
                next: 1,
                prev: 2,
                reason: SelectReason::Keyboard
            })
        ));
        let later = t0 + Duration::from_millis(200);
        c.handle_event(&key_up(KeyCode::Right), later);
        assert_eq!(c.select(), 2);
    }

    #[test]
    fn key_press_and_other_keys_are_ignored() {
        let mut c = carousel();
        let now = Instant::now();
        let press = Event::Key(KeyEvent::new(KeyCode::Right));
        assert_eq!(c.handle_event(&press, now), CarouselOutcome::Ignored);
        assert_eq!(c.handle_event(&key_up(KeyCode::Other(38)), now), CarouselOutcome::Ignored);
        assert_eq!(c.select(), 2);
    }

    #[test]
    fn key_burst_is_throttled_with_trailing_step() {
        let mut c = carousel();
        let host = FixedWidth(500.0);
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(matches!(
            c.handle_event(&key_up(KeyCode::Right), t0),
            CarouselOutcome::Selected(_)
        ));
        assert_eq!(c.handle_event(&key_up(KeyCode::Right), t0 + ms(30)), CarouselOutcome::Deferred);
        assert_eq!(c.handle_event(&key_up(KeyCode::Right), t0 + ms(60)), CarouselOutcome::Deferred);
        assert_eq!(c.select(), 3);
        assert_eq!(c.next_deadline(t0 + ms(60)), Some(ms(90)));

        assert!(!c.tick(t0 + ms(100), &host).changed());
        let tick = c.tick(t0 + ms(150), &host);
        assert_eq!(tick.selection.map(|ch| ch.next), Some(4));
        assert_eq!(c.select(), 4);
        assert_eq!(c.next_deadline(t0 + ms(150)), None);
    }

    #[test]
    fn swipe_commits_through_update_select() {
        let mut c = carousel();
        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 100.0), now);
        assert_eq!(
            c.handle_event(&pointer(PointerEventKind::Moved, 300.0), now),
            CarouselOutcome::Redraw
        );
        let outcome = c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 300.0), now);
        assert!(matches!(
            outcome,
            CarouselOutcome::Selected(SelectionChange {
                next: 1,
                prev: 2,
                reason: SelectReason::Swipe(SwipeDirection::Right)
            })
        ));
        assert!(c.content().drag_state().is_idle());
    }

    #[test]
    fn swipe_left_past_end_wraps() {
        let mut c = carousel();
        c.update_select(4);
        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 400.0), now);
        c.handle_event(&pointer(PointerEventKind::Moved, 100.0), now);
        c.handle_event(&pointer(PointerEventKind::Leave, 100.0), now);
        assert_eq!(c.select(), 0);
    }

    #[test]
    fn short_drag_only_redraws() {
        let mut c = carousel();
        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 300.0), now);
        c.handle_event(&pointer(PointerEventKind::Moved, 250.0), now);
        let outcome = c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 250.0), now);
        assert_eq!(outcome, CarouselOutcome::Redraw);
        assert_eq!(c.select(), 2);
    }

    #[test]
    fn single_pane_swipe_is_redraw_only() {
        let mut c = Carousel::new(["only"], CarouselConfig::default());
        c.mount(&FixedWidth(100.0));
        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 0.0), now);
        c.handle_event(&pointer(PointerEventKind::Moved, 90.0), now);
        let outcome = c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 90.0), now);
        assert_eq!(outcome, CarouselOutcome::Redraw);
        assert_eq!(c.select(), 0);
    }

    #[test]
    fn selector_click_jumps() {
        let mut c = carousel();
        let change = c.click_selector(0).unwrap();
        assert_eq!(change.reason, SelectReason::Selector);
        assert_eq!(c.select(), 0);
        assert_eq!(c.click_selector(9), None);
        assert_eq!(c.click_selector(0), None);
    }

    #[test]
    fn set_panes_rewraps_selection() {
        let mut c = carousel();
        c.update_select(4);
        let change = c.set_panes(["x", "y", "z"]).unwrap();
        assert_eq!(change.reason, SelectReason::PanesReplaced);
        assert_eq!(c.select(), 0);
        assert!(c.needs_render());

        assert_eq!(c.set_panes([]), None);
        assert_eq!(c.select(), 0);
        assert_eq!(c.update_select(1), None);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c: Carousel<u8> = Carousel::new([], CarouselConfig::default());
        c.mount(&FixedWidth(100.0));
        let now = Instant::now();
        assert_eq!(c.handle_event(&key_up(KeyCode::Right), now), CarouselOutcome::Ignored);
        assert_eq!(
            c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 0.0), now),
            CarouselOutcome::Ignored
        );
        let view = c.view();
        assert!(view.content.panes.is_empty());
        assert!(view.selector.items.is_empty());
    }

    #[test]
    fn resize_remeasures_after_tick() {
        let mut c = carousel();
        let t0 = Instant::now();
        let resize = Event::Resize {
            width: 1024.0,
            height: 768.0,
        };
        assert_eq!(c.handle_event(&resize, t0), CarouselOutcome::Deferred);
        let tick = c.tick(t0 + Duration::from_millis(300), &FixedWidth(800.0));
        assert!(tick.remeasured);
        assert_eq!(c.content().pane_width(), Some(800.0));
    }

    #[test]
    fn unmount_stops_resize_and_key_trailing() {
        let mut c = carousel();
        let t0 = Instant::now();
        c.handle_event(&key_up(KeyCode::Right), t0);
        c.handle_event(&key_up(KeyCode::Right), t0);
        c.unmount();
        let tick = c.tick(t0 + Duration::from_secs(1), &FixedWidth(10.0));
        assert!(!tick.changed());
        let resize = Event::Resize {
            width: 1.0,
            height: 1.0,
        };
        assert_eq!(c.handle_event(&resize, t0), CarouselOutcome::Ignored);
    }

    #[test]
    fn view_renders_siblings() {
        let config = CarouselConfig::default().with_class_name("gallery");
        let mut c = Carousel::new(PANES, config);
        c.mount(&FixedWidth(500.0));
        let view = c.view();
        assert_eq!(view.class_name, "gallery");
        assert_eq!(view.selector.selected(), Some(2));
        assert_eq!(view.content.panes.len(), 5);
        assert!(view.content.panes[2].active);
        assert!(!c.needs_render());
    }

    #[test]
    fn debug_does_not_require_callback_debug() {
        let c = carousel().on_select(|_, _| {});
        let text = format!("{c:?}");
        assert!(text.contains("select: 2"));
        assert!(text.contains("on_select: true"));
    }

    #[test]
    fn panes_added_after_empty_mount_are_measured_on_tick() {
        let host = FixedWidth(500.0);
        let mut c: Carousel<&str> = Carousel::new([], CarouselConfig::default());
        c.mount(&host);
        assert_eq!(c.content().pane_width(), None);

        c.set_panes(PANES);
        let now = Instant::now();
        assert_eq!(c.next_deadline(now), Some(Duration::ZERO));
        assert!(c.tick(now, &host).remeasured);
        assert_eq!(c.content().pane_width(), Some(500.0));
        assert_eq!(c.content().threshold(), 100.0);

        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 100.0), now);
        c.handle_event(&pointer(PointerEventKind::Moved, 101.0), now);
        let outcome = c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 101.0), now);
        assert_eq!(outcome, CarouselOutcome::Redraw);
        assert_eq!(c.select(), 2);
    }

    #[test]
    fn set_panes_while_unmounted_does_not_queue_measurement() {
        let mut c: Carousel<&str> = Carousel::new([], CarouselConfig::default());
        c.set_panes(PANES);
        assert_eq!(c.next_deadline(Instant::now()), None);
    }

    #[test]
    fn click_without_motion_keeps_selection_with_negative_ratio() {
        let config = CarouselConfig::default().with_swipe_ratio(-0.2);
        let mut c = Carousel::new(PANES, config);
        c.mount(&FixedWidth(500.0));
        assert_eq!(c.content().threshold(), 0.0);

        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 100.0), now);
        let outcome = c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 100.0), now);
        assert_eq!(outcome, CarouselOutcome::Redraw);
        assert_eq!(c.select(), 2);
    }

    #[test]
    fn drag_redraws_strip_but_not_selector() {
        let mut c = carousel();
        assert!(c.selector_needs_render());
        let _ = c.view();
        assert!(!c.needs_render());
        assert!(!c.selector_needs_render());

        let now = Instant::now();
        c.handle_event(&pointer(PointerEventKind::Down(MouseButton::Left), 100.0), now);
        c.handle_event(&pointer(PointerEventKind::Moved, 150.0), now);
        assert!(c.needs_render());
        assert!(!c.selector_needs_render());

        c.handle_event(&pointer(PointerEventKind::Moved, 300.0), now);
        c.handle_event(&pointer(PointerEventKind::Up(MouseButton::Left), 300.0), now);
        assert_eq!(c.select(), 1);
        assert!(c.selector_needs_render());
        let _ = c.view();
        assert!(!c.selector_needs_render());

        c.set_panes(["x", "y"]);
        assert!(c.selector_needs_render());
    }
}
