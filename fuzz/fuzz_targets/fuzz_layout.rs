#![no_main]

use carousel_widgets::layout::{Arrangement, place};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // len 0..256, select anywhere (clamped by the arrangement).
    if data.len() < 4 {
        return;
    }
    let len = usize::from(data[0]);
    let select = usize::from(data[1]);
    let width = (data[2] > 0).then(|| f64::from(data[2]) * 8.0);
    let delta = f64::from(data[3] as i8) * 4.0;

    let arrangement = Arrangement::new(len, select);
    assert_eq!(arrangement.len(), len);

    let mut seen = vec![false; len];
    for &index in arrangement.order() {
        assert!(!seen[index], "pane arranged twice");
        seen[index] = true;
    }

    let placed = place(&arrangement, width, delta);
    assert_eq!(placed.len(), len);
    for p in &placed {
        assert!(p.left.percent.is_finite() && p.left.pixels.is_finite());
        if p.distance == 0 {
            assert_eq!(p.opacity, 1.0);
        }
    }
    if len > 0 {
        assert_eq!(placed.iter().filter(|p| p.distance == 0).count(), 1);
    }
});
