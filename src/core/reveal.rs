//! Scroll-triggered reveal of content cards
//!
//! Cards start hidden and shifted down. The first time a card crosses the
//! visibility threshold it switches to its terminal state and keeps it for
//! the lifetime of the page.

/// Options handed to the browser's intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    pub root_margin: &'static str,
}

/// Observer options for content cards
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

/// Observer options for hero statistics
pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: crate::core::counter::COUNTER_THRESHOLD,
    root_margin: "0px",
};

/// Inline styles a card carries before it is revealed
pub const HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];

/// Inline styles a card carries once revealed
pub const REVEALED_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Visibility state of one observed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// Tracks the reveal state of a fixed list of elements, addressed by index
#[derive(Debug, Clone, Default)]
pub struct Revealer {
    states: Vec<RevealState>,
}

impl Revealer {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![RevealState::Pending; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Number of elements already revealed
    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    /// Handle an intersection report for the element at `index`.
    ///
    /// Returns `true` only on the pending → revealed transition, which is
    /// when the caller applies [`REVEALED_STYLE`]. Reports for unknown
    /// indices and non-intersecting reports change nothing.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if is_intersecting && *state == RevealState::Pending {
            *state = RevealState::Revealed;
            return true;
        }
        false
    }
}
