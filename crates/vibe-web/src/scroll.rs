// Pure scroll math, kept free of web APIs so host-side tests can include it.

/// Normalized scroll progress in [0, 1].
///
/// `page_height` is the full scrollable document height, `viewport_height`
/// the visible portion. A page that cannot scroll reports 0.
#[inline]
pub fn progress(scroll_y: f64, page_height: f64, viewport_height: f64) -> f32 {
    let track = page_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    ((scroll_y / track) as f32).clamp(0.0, 1.0)
}
