// Host-side tests for the pure scroll math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/scroll.rs");
}

use scroll::*;

#[test]
fn progress_spans_the_scrollable_track() {
    // 3000px page in a 1000px viewport leaves a 2000px track.
    assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
    assert!((progress(1000.0, 3000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn progress_is_clamped_to_the_unit_interval() {
    // Overscroll bounce can report positions past either end.
    assert_eq!(progress(-50.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress(2500.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn unscrollable_page_reports_zero() {
    assert_eq!(progress(0.0, 1000.0, 1000.0), 0.0);
    // A viewport taller than the page must not divide by a negative track.
    assert_eq!(progress(10.0, 500.0, 1000.0), 0.0);
}

#[test]
fn progress_is_monotone_in_scroll_position() {
    let mut last = -1.0f32;
    for y in (0..=2000).step_by(50) {
        let p = progress(y as f64, 3000.0, 1000.0);
        assert!(p >= last);
        last = p;
    }
}
