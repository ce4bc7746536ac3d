//! Intersection-driven behaviors: card reveals and statistic counters

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::core::controller::PageController;
use crate::core::counter::{COUNTER_TICK_MS, CounterRun};
use crate::core::reveal::{COUNTER_OBSERVER, HIDDEN_STYLE, REVEAL_OBSERVER, REVEALED_STYLE};
use crate::core::selectors;
use crate::ui::dom::{self, DomResult};

/// Hide every card, then reveal each one the first time it scrolls into view
pub fn install_reveal(
    controller: Rc<RefCell<PageController>>,
    targets: Vec<HtmlElement>,
) -> DomResult<()> {
    if targets.is_empty() {
        return Ok(());
    }

    for element in &targets {
        dom::set_styles(element, HIDDEN_STYLE)?;
    }

    dom::observe(
        targets,
        REVEAL_OBSERVER,
        move |_, index, element, is_intersecting| {
            if controller
                .borrow_mut()
                .on_card_intersection(index, is_intersecting)
            {
                let _ = dom::set_styles(element, REVEALED_STYLE);
                let _ = element.class_list().add_1(selectors::REVEALED_CLASS);
            }
        },
    )?;
    Ok(())
}

/// Count each statistic up from zero the first time it is half visible
pub fn install_counters(
    controller: Rc<RefCell<PageController>>,
    counters: Vec<HtmlElement>,
) -> DomResult<()> {
    if counters.is_empty() {
        return Ok(());
    }

    dom::observe(
        counters,
        COUNTER_OBSERVER,
        move |observer, index, element, is_intersecting| {
            let text = element.text_content().unwrap_or_default();
            let run = controller
                .borrow_mut()
                .on_counter_intersection(index, is_intersecting, &text);
            if let Some(run) = run {
                observer.unobserve(element);
                animate(element.clone(), run);
            }
        },
    )?;
    Ok(())
}

/// Drive a counter run with a repeating timer that clears itself at the end
fn animate(element: HtmlElement, run: CounterRun) {
    let run = RefCell::new(run);
    let handle: Rc<Cell<Option<IntervalHandle>>> = Rc::new(Cell::new(None));
    let own_handle = handle.clone();

    let started = set_interval_with_handle(
        move || {
            let frame = run.borrow_mut().tick();
            element.set_text_content(Some(&frame.text));
            if frame.done
                && let Some(handle) = own_handle.take()
            {
                handle.clear();
            }
        },
        Duration::from_millis(u64::from(COUNTER_TICK_MS)),
    );

    match started {
        Ok(interval) => handle.set(Some(interval)),
        Err(err) => leptos::logging::warn!("Failed to start counter: {:?}", err),
    }
}
