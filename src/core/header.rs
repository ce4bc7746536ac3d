//! Header appearance driven by the scroll position
//!
//! Two independent axes are recomputed on every scroll event:
//! translucency (past [`OPAQUE_AFTER`]) and visibility (hidden while
//! scrolling down past [`HIDE_AFTER`]).

/// Offset after which the header becomes opaque and gains a shadow
pub const OPAQUE_AFTER: f64 = 100.0;

/// Offset after which scrolling down slides the header away
pub const HIDE_AFTER: f64 = 200.0;

const OPAQUE_BACKGROUND: &str = "rgba(255, 255, 255, 0.98)";
const TRANSLUCENT_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
const RAISED_SHADOW: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";

/// Inline styles to apply to the header after a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub opaque: bool,
    pub hidden: bool,
}

impl HeaderStyle {
    pub fn background(&self) -> &'static str {
        if self.opaque {
            OPAQUE_BACKGROUND
        } else {
            TRANSLUCENT_BACKGROUND
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        if self.opaque { RAISED_SHADOW } else { "none" }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }

    /// `(property, value)` pairs in application order
    pub fn properties(&self) -> [(&'static str, &'static str); 3] {
        [
            ("background", self.background()),
            ("box-shadow", self.box_shadow()),
            ("transform", self.transform()),
        ]
    }
}

/// Remembers the previous scroll offset between events
#[derive(Debug, Clone)]
pub struct HeaderTracker {
    last_scroll_y: f64,
}

impl HeaderTracker {
    /// Start tracking from the current scroll offset
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Compute the header style for a new scroll offset
    pub fn on_scroll(&mut self, scroll_y: f64) -> HeaderStyle {
        let style = HeaderStyle {
            opaque: scroll_y > OPAQUE_AFTER,
            hidden: scroll_y > self.last_scroll_y && scroll_y > HIDE_AFTER,
        };
        self.last_scroll_y = scroll_y;
        style
    }
}

impl Default for HeaderTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translucency_threshold() {
        let mut tracker = HeaderTracker::new(0.0);
        assert!(!tracker.on_scroll(50.0).opaque);
        assert!(!tracker.on_scroll(100.0).opaque);
        assert!(tracker.on_scroll(100.5).opaque);
        assert!(!tracker.on_scroll(99.0).opaque);
    }

    #[test]
    fn test_opaque_style_values() {
        let style = HeaderStyle {
            opaque: true,
            hidden: false,
        };
        assert_eq!(style.background(), "rgba(255, 255, 255, 0.98)");
        assert_eq!(style.box_shadow(), "0 4px 6px -1px rgba(0, 0, 0, 0.1)");
        assert_eq!(style.transform(), "translateY(0)");
    }

    #[test]
    fn test_translucent_style_values() {
        let style = HeaderStyle {
            opaque: false,
            hidden: true,
        };
        assert_eq!(style.background(), "rgba(255, 255, 255, 0.95)");
        assert_eq!(style.box_shadow(), "none");
        assert_eq!(style.transform(), "translateY(-100%)");
    }

    #[test]
    fn test_hides_only_when_scrolling_down_past_threshold() {
        let mut tracker = HeaderTracker::new(0.0);
        assert!(!tracker.on_scroll(150.0).hidden);
        assert!(!tracker.on_scroll(200.0).hidden);
        assert!(tracker.on_scroll(201.0).hidden);
        assert!(tracker.on_scroll(400.0).hidden);
    }

    #[test]
    fn test_scrolling_up_shows_header() {
        let mut tracker = HeaderTracker::new(500.0);
        assert!(!tracker.on_scroll(450.0).hidden);
        assert!(tracker.on_scroll(460.0).hidden);
        assert!(!tracker.on_scroll(460.0).hidden);
    }

    #[test]
    fn test_first_event_compares_against_initial_offset() {
        let mut tracker = HeaderTracker::new(300.0);
        assert!(!tracker.on_scroll(300.0).hidden);
        assert_eq!(tracker.last_scroll_y(), 300.0);
    }

    #[test]
    fn test_properties_order() {
        let style = HeaderTracker::default().on_scroll(0.0);
        let names: Vec<_> = style.properties().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["background", "box-shadow", "transform"]);
    }
}
