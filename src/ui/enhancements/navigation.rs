//! Smooth scrolling for in-page navigation links

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::core::navigation::{is_active_link, is_in_page_href, scroll_target};
use crate::core::selectors;
use crate::ui::dom::{self, DomResult};

pub fn install() -> DomResult<()> {
    for link in dom::query_all(selectors::NAV_IN_PAGE_LINK)? {
        let target = link.clone();
        dom::listen(&link, "click", move |event: Event| {
            event.prevent_default();
            if let Some(href) = target.get_attribute("href") {
                scroll_to_section(&href);
            }
        })?;
    }
    Ok(())
}

fn scroll_to_section(target_id: &str) {
    if !is_in_page_href(target_id) {
        return;
    }
    let Ok(document) = dom::document() else {
        return;
    };
    let Some(section) = document
        .query_selector(target_id)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let header_height = dom::query(selectors::HEADER)
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);

    if let Ok(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64, header_height));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    update_active_link(target_id);
}

fn update_active_link(target_id: &str) {
    let Ok(links) = dom::query_all(selectors::NAV_LINK) else {
        return;
    };
    for link in links {
        let class_list = link.class_list();
        let _ = class_list.remove_1(selectors::NAV_ACTIVE_CLASS);
        if is_active_link(link.get_attribute("href").as_deref(), target_id) {
            let _ = class_list.add_1(selectors::NAV_ACTIVE_CLASS);
        }
    }
}
