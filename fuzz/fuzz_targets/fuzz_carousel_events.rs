#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use carousel_core::event::{Event, KeyCode, KeyEvent, MouseButton, PointerEvent, PointerEventKind};
use carousel_widgets::FixedWidth;
use carousel_widgets::carousel::Carousel;
use carousel_widgets::config::CarouselConfig;
use libfuzzer_sys::fuzz_target;
use web_time::Instant;

#[derive(Debug, Arbitrary)]
enum Op {
    Down(i16),
    Move(i16),
    Up(i16),
    Leave,
    Blur,
    KeyUp(bool),
    KeyDown(bool),
    Resize(u16),
    Click(u8),
    Select(i8),
    SetPanes(u8),
    Wait(u16),
    Unmount,
    Mount(u16),
}

#[derive(Debug, Arbitrary)]
struct Session {
    panes: u8,
    width: u16,
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let len = usize::from(session.panes % 32);
    let mut host = FixedWidth(f64::from(session.width));
    let mut carousel = Carousel::new(0..len, CarouselConfig::default());
    carousel.mount(&host);

    let mut now = Instant::now();
    for op in session.ops.into_iter().take(512) {
        let event = match op {
            Op::Down(x) => Some(pointer(PointerEventKind::Down(MouseButton::Left), x)),
            Op::Move(x) => Some(pointer(PointerEventKind::Moved, x)),
            Op::Up(x) => Some(pointer(PointerEventKind::Up(MouseButton::Left), x)),
            Op::Leave => Some(pointer(PointerEventKind::Leave, 0)),
            Op::Blur => Some(Event::Focus(false)),
            Op::KeyUp(right) => Some(Event::Key(KeyEvent::release(arrow(right)))),
            Op::KeyDown(right) => Some(Event::Key(KeyEvent::new(arrow(right)))),
            Op::Resize(w) => {
                host = FixedWidth(f64::from(w));
                Some(Event::Resize {
                    width: f64::from(w),
                    height: 600.0,
                })
            }
            Op::Click(i) => {
                carousel.click_selector(usize::from(i));
                None
            }
            Op::Select(i) => {
                carousel.update_select(isize::from(i));
                None
            }
            Op::SetPanes(n) => {
                carousel.set_panes(0..usize::from(n % 32));
                None
            }
            Op::Wait(ms) => {
                now += Duration::from_millis(u64::from(ms));
                None
            }
            Op::Unmount => {
                carousel.unmount();
                None
            }
            Op::Mount(w) => {
                host = FixedWidth(f64::from(w));
                carousel.mount(&host);
                None
            }
        };
        if let Some(event) = event {
            carousel.handle_event(&event, now);
        }
        carousel.tick(now, &host);

        // Selection stays in range.
        let len = carousel.len();
        if len == 0 {
            assert_eq!(carousel.select(), 0);
        } else {
            assert!(carousel.select() < len, "select out of range");
        }

        // Idle drags carry no delta.
        let drag = carousel.content().drag_state();
        if !drag.dragging {
            assert!(drag.is_idle(), "idle drag with residual delta");
        }
    }

    let select = carousel.select();
    let len = carousel.len();
    let view = carousel.view();
    assert_eq!(view.content.panes.len(), len);
    assert_eq!(view.selector.items.len(), len);
    if len > 0 {
        assert_eq!(view.selector.selected(), Some(select));
        assert_eq!(view.content.panes.iter().filter(|p| p.active).count(), 1);
    }
});

fn pointer(kind: PointerEventKind, x: i16) -> Event {
    Event::Pointer(PointerEvent::new(kind, f64::from(x), 0.0))
}

fn arrow(right: bool) -> KeyCode {
    if right { KeyCode::Right } else { KeyCode::Left }
}
