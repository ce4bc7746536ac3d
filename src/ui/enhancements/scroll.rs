//! Scroll-driven styles: header state, parallax and the progress bar

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Event, HtmlElement};

use crate::core::controller::{PageController, ScrollSnapshot};
use crate::core::selectors;
use crate::ui::dom::{self, DomResult};

pub fn install(
    controller: Rc<RefCell<PageController>>,
    floating_cards: Vec<HtmlElement>,
    progress_bar: bool,
) -> DomResult<()> {
    let window = dom::window()?;
    let header = dom::query(selectors::HEADER).ok();
    let bar = if progress_bar {
        dom::query(selectors::SCROLL_PROGRESS_BAR).ok()
    } else {
        None
    };

    dom::listen(&window, "scroll", move |_: Event| {
        let update = controller.borrow_mut().on_scroll(&snapshot());

        if let Some(header) = &header {
            let _ = dom::set_styles(header, &update.header.properties());
        }

        for (card, transform) in floating_cards.iter().zip(&update.parallax) {
            let _ = dom::set_style(card, "transform", transform);
        }

        if let (Some(bar), Some(width)) = (&bar, &update.progress) {
            let _ = dom::set_style(bar, "width", width);
        }
    })
}

fn snapshot() -> ScrollSnapshot {
    let viewport_height = dom::window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = dom::document()
        .ok()
        .and_then(|d| d.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);

    ScrollSnapshot {
        scroll_y: dom::scroll_y(),
        document_height,
        viewport_height,
    }
}
