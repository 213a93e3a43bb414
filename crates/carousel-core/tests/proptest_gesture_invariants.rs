//! Property-based invariant tests for the drag gesture state machine.
//!
//! These tests verify:
//!
//! 1. Events before the first pointer-down never change the state
//! 2. After any ended gesture the state is exactly idle
//! 3. Exactly one `Ended` update per down → moves → up cycle
//! 4. Sub-threshold drags never commit a swipe
//! 5. Idle state always has zero deltas
//! 6. Throttle never fires twice inside one interval

use std::time::Duration;

use carousel_core::event::{Event, MouseButton, PointerEvent, PointerEventKind};
use carousel_core::gesture::{DragGesture, DragState, GestureUpdate, SwipePolicy};
use carousel_core::rate_limit::Throttle;
use proptest::prelude::*;
use web_time::Instant;

// ── Strategies ──────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = f64> {
    -2000.0f64..2000.0
}

fn width() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0f64..1500.0).prop_map(Some)]
}

fn pointer_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| Event::Pointer(PointerEvent::new(
            PointerEventKind::Down(MouseButton::Left),
            x,
            y
        ))),
        (coord(), coord())
            .prop_map(|(x, y)| Event::Pointer(PointerEvent::new(PointerEventKind::Moved, x, y))),
        (coord(), coord()).prop_map(|(x, y)| Event::Pointer(PointerEvent::new(
            PointerEventKind::Up(MouseButton::Left),
            x,
            y
        ))),
        Just(Event::Pointer(PointerEvent::new(
            PointerEventKind::Leave,
            0.0,
            0.0
        ))),
        Just(Event::Focus(false)),
    ]
}

fn non_down_strategy() -> impl Strategy<Value = Event> {
    pointer_strategy().prop_filter("no pointer-down", |e| {
        !matches!(
            e,
            Event::Pointer(PointerEvent {
                kind: PointerEventKind::Down(_),
                ..
            })
        )
    })
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Nothing happens before the first down
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn events_before_down_are_noops(
        events in proptest::collection::vec(non_down_strategy(), 0..40),
        w in width(),
    ) {
        let mut g = DragGesture::default();
        for event in &events {
            prop_assert_eq!(g.process(event, w), GestureUpdate::Ignored);
            prop_assert!(g.state().is_idle());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2 + 5. Ended gestures leave the idle state behind
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ended_gesture_resets_state(
        events in proptest::collection::vec(pointer_strategy(), 0..80),
        w in width(),
    ) {
        let mut g = DragGesture::default();
        for event in &events {
            if let GestureUpdate::Ended(_) = g.process(event, w) {
                prop_assert_eq!(*g.state(), DragState::IDLE);
            }
            if !g.is_dragging() {
                prop_assert_eq!(g.state().delta_x(), 0.0);
                prop_assert_eq!(g.state().delta_y(), 0.0);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. One end per cycle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_end_per_cycle(
        start in coord(),
        moves in proptest::collection::vec((coord(), coord()), 0..20),
        w in width(),
    ) {
        let mut g = DragGesture::default();
        let mut ends = 0;
        let mut feed = |g: &mut DragGesture, e: Event| {
            if matches!(g.process(&e, w), GestureUpdate::Ended(_)) {
                ends += 1;
            }
        };
        feed(&mut g, Event::Pointer(PointerEvent::new(PointerEventKind::Down(MouseButton::Left), start, 0.0)));
        for (x, y) in moves {
            feed(&mut g, Event::Pointer(PointerEvent::new(PointerEventKind::Moved, x, y)));
        }
        feed(&mut g, Event::Pointer(PointerEvent::new(PointerEventKind::Up(MouseButton::Left), 0.0, 0.0)));
        feed(&mut g, Event::Pointer(PointerEvent::new(PointerEventKind::Leave, 0.0, 0.0)));
        prop_assert_eq!(ends, 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Sub-threshold drags never commit
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sub_threshold_never_commits(
        pane_width in 1.0f64..1500.0,
        fraction in -1.0f64..=1.0,
    ) {
        let policy = SwipePolicy::default();
        let threshold = policy.threshold(Some(pane_width));
        let delta = threshold * fraction;
        prop_assert_eq!(policy.decide(delta, Some(pane_width)), None);
    }

    #[test]
    fn over_threshold_always_commits(
        pane_width in 10.0f64..1500.0,
        extra in 0.001f64..1000.0,
        leftward in any::<bool>(),
    ) {
        let policy = SwipePolicy::default();
        let magnitude = policy.threshold(Some(pane_width)) + extra;
        let delta = if leftward { -magnitude } else { magnitude };
        let decision = policy.decide(delta, Some(pane_width));
        prop_assert!(decision.is_some());
        let step = decision.map(|d| d.step()).unwrap_or(0);
        prop_assert_eq!(step, if leftward { 1 } else { -1 });
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Throttle spacing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn throttle_respects_interval(
        gaps in proptest::collection::vec(0u64..400, 1..60),
    ) {
        let interval = Duration::from_millis(150);
        let mut throttle = Throttle::new(interval);
        let t0 = Instant::now();
        let mut now = t0;
        let mut fired_at: Vec<Instant> = Vec::new();
        for gap in gaps {
            now += Duration::from_millis(gap);
            if throttle.poll(now).is_some() {
                fired_at.push(now);
            }
            if throttle.call(now, ()).is_some() {
                fired_at.push(now);
            }
        }
        for pair in fired_at.windows(2) {
            prop_assert!(pair[1].duration_since(pair[0]) >= interval);
        }
    }
}
