//! Scroll progress bar and loading splash timings

/// Delay after the window `load` event before the splash starts fading
pub const SPLASH_HOLD_MS: u32 = 1500;

/// Fade duration before the splash is removed from the document
pub const SPLASH_FADE_MS: u32 = 500;

/// Percentage of the page scrolled, or `None` when the page cannot scroll.
///
/// The result is clamped to `0..=100` so overscroll never overflows the bar.
pub fn scroll_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> Option<f64> {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    Some((scroll_top / scrollable * 100.0).clamp(0.0, 100.0))
}

/// CSS width of the progress bar for a percentage
pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), Some(0.0));
        assert_eq!(scroll_percent(1000.0, 3000.0, 1000.0), Some(50.0));
        assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), Some(100.0));
    }

    #[test]
    fn test_page_that_cannot_scroll_has_no_progress() {
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
        assert_eq!(scroll_percent(0.0, 600.0, 800.0), None);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(scroll_percent(2100.0, 3000.0, 1000.0), Some(100.0));
        assert_eq!(scroll_percent(-40.0, 3000.0, 1000.0), Some(0.0));
    }

    #[test]
    fn test_progress_width() {
        assert_eq!(progress_width(50.0), "50%");
        assert_eq!(progress_width(12.5), "12.5%");
    }
}
