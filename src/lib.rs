//! Ariatek Studio homepage
//!
//! Server-rendered marketing site with a client-side enhancement layer,
//! built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::{SiteSettings, selectors};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let meta_content = |selector: &str| {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
    };
    let settings = SiteSettings::from_meta(
        meta_content(selectors::ENHANCEMENTS_META).as_deref(),
        meta_content(selectors::CONTACT_META),
    );

    leptos::logging::log!(
        "hydrating with enhancements [{}]",
        settings.enhancements.to_meta()
    );
    leptos::mount::hydrate_body(move || view! { <App settings/> });
}
