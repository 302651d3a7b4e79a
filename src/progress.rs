/// Percentage of the document scrolled, in `[0, 100]`.
///
/// A document that fits the viewport has nothing to scroll and reads 0.
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    let pct = 100.0 * scroll_y / scrollable;
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

/// Inline `width` value for the progress bar.
pub fn bar_width(percent: f64) -> String {
    format!("{}%", percent)
}
