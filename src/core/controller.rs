//! Page controller composing every scroll- and visibility-driven behavior
//!
//! The browser layer owns one [`PageController`] per hydrated page and feeds
//! it synthetic events; everything the controller returns is a plain value
//! describing the styles to apply. No DOM access happens here.

use crate::core::counter::CounterRun;
use crate::core::header::{HeaderStyle, HeaderTracker};
use crate::core::motion::parallax_transform;
use crate::core::progress::{progress_width, scroll_percent};
use crate::core::reveal::Revealer;

/// Scroll event as seen by the reactors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    /// Vertical scroll offset of the viewport
    pub scroll_y: f64,
    /// Full scrollable height of the document body
    pub document_height: f64,
    /// Height of the viewport
    pub viewport_height: f64,
}

impl ScrollSnapshot {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            ..Default::default()
        }
    }
}

/// Reacts to scroll events
pub trait ScrollReactor {
    type Output;

    fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Self::Output;
}

/// Reacts to intersection reports for the element at an index
pub trait IntersectionReactor {
    type Output;

    fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Self::Output;
}

impl ScrollReactor for HeaderTracker {
    type Output = HeaderStyle;

    fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> HeaderStyle {
        HeaderTracker::on_scroll(self, snapshot.scroll_y)
    }
}

impl IntersectionReactor for Revealer {
    /// True when the element must switch to its revealed style
    type Output = bool;

    fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        Revealer::on_intersection(self, index, is_intersecting)
    }
}

/// Transforms for the floating hero cards
#[derive(Debug, Clone, Default)]
pub struct Parallax {
    count: usize,
}

impl Parallax {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl ScrollReactor for Parallax {
    /// One transform per card, in document order
    type Output = Vec<String>;

    fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<String> {
        (0..self.count)
            .map(|index| parallax_transform(snapshot.scroll_y, index))
            .collect()
    }
}

/// Width of the scroll-progress bar
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollProgress;

impl ScrollReactor for ScrollProgress {
    /// `None` leaves the bar untouched
    type Output = Option<String>;

    fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Option<String> {
        scroll_percent(
            snapshot.scroll_y,
            snapshot.document_height,
            snapshot.viewport_height,
        )
        .map(progress_width)
    }
}

/// One-shot triggers for the statistic counters
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    started: Vec<bool>,
}

impl CounterBoard {
    pub fn new(count: usize) -> Self {
        Self {
            started: vec![false; count],
        }
    }

    pub fn started_count(&self) -> usize {
        self.started.iter().filter(|s| **s).count()
    }
}

impl IntersectionReactor for CounterBoard {
    /// True exactly once per element: start its run and stop observing it
    type Output = bool;

    fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.started.get_mut(index) {
            Some(started) if is_intersecting && !*started => {
                *started = true;
                true
            }
            _ => false,
        }
    }
}

/// Everything to restyle after a scroll event
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub header: HeaderStyle,
    pub parallax: Vec<String>,
    pub progress: Option<String>,
}

/// Element counts found on the page at install time
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLayout {
    pub reveal_targets: usize,
    pub counters: usize,
    pub floating_cards: usize,
    pub initial_scroll_y: f64,
    /// Whether the scroll-progress bar is installed
    pub progress_bar: bool,
}

/// State shared by the scroll and intersection handlers of one page
#[derive(Debug, Clone)]
pub struct PageController {
    header: HeaderTracker,
    parallax: Parallax,
    progress: Option<ScrollProgress>,
    reveal: Revealer,
    counters: CounterBoard,
}

impl PageController {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            header: HeaderTracker::new(layout.initial_scroll_y),
            parallax: Parallax::new(layout.floating_cards),
            progress: layout.progress_bar.then_some(ScrollProgress),
            reveal: Revealer::new(layout.reveal_targets),
            counters: CounterBoard::new(layout.counters),
        }
    }

    pub fn revealer(&self) -> &Revealer {
        &self.reveal
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    /// Handle a scroll event for every scroll-driven component
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> ScrollUpdate {
        ScrollUpdate {
            header: ScrollReactor::on_scroll(&mut self.header, snapshot),
            parallax: self.parallax.on_scroll(snapshot),
            progress: self
                .progress
                .as_mut()
                .and_then(|progress| progress.on_scroll(snapshot)),
        }
    }

    /// Intersection report for a content card; true when it must be revealed
    pub fn on_card_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        IntersectionReactor::on_intersection(&mut self.reveal, index, is_intersecting)
    }

    /// Intersection report for a statistic.
    ///
    /// Returns the run to drive when the counter starts; the caller stops
    /// observing the element at that point.
    pub fn on_counter_intersection(
        &mut self,
        index: usize,
        is_intersecting: bool,
        text: &str,
    ) -> Option<CounterRun> {
        self.counters
            .on_intersection(index, is_intersecting)
            .then(|| CounterRun::start(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_board_triggers_once() {
        let mut board = CounterBoard::new(2);
        assert!(!board.on_intersection(0, false));
        assert!(board.on_intersection(0, true));
        assert!(!board.on_intersection(0, true));
        assert!(board.on_intersection(1, true));
        assert_eq!(board.started_count(), 2);
    }

    #[test]
    fn test_counter_board_ignores_unknown_index() {
        let mut board = CounterBoard::new(1);
        assert!(!board.on_intersection(3, true));
    }

    #[test]
    fn test_parallax_reactor_yields_one_transform_per_card() {
        let mut parallax = Parallax::new(3);
        let transforms = parallax.on_scroll(&ScrollSnapshot::at(0.0));
        assert_eq!(transforms.len(), 3);
        assert!(transforms.iter().all(|t| t == "translateY(0px)" || t == "translateY(-0px)"));
    }

    #[test]
    fn test_progress_reactor() {
        let mut progress = ScrollProgress;
        let snapshot = ScrollSnapshot {
            scroll_y: 250.0,
            document_height: 1500.0,
            viewport_height: 1000.0,
        };
        assert_eq!(progress.on_scroll(&snapshot), Some("50%".to_string()));
        assert_eq!(progress.on_scroll(&ScrollSnapshot::at(10.0)), None);
    }

    #[test]
    fn test_controller_without_progress_bar() {
        let mut controller = PageController::new(PageLayout::default());
        let update = controller.on_scroll(&ScrollSnapshot {
            scroll_y: 10.0,
            document_height: 2000.0,
            viewport_height: 800.0,
        });
        assert_eq!(update.progress, None);
        assert!(update.parallax.is_empty());
    }
}
