//! Thin helpers over `web_sys` used by the enhancement installers
//!
//! Every lookup returns a [`DomResult`]; callers treat a missing element as
//! "skip this behavior", never as a failure visible to the visitor.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{
    Document, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::core::reveal::ObserverOptions;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element matches '{0}'")]
    Missing(String),
    #[error("{api} failed: {message}")]
    Js { api: &'static str, message: String },
}

pub type DomResult<T> = Result<T, DomError>;

/// Wrap a rejected browser call into a [`DomError`]
pub fn js_error(api: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> DomError {
    move |value| DomError::Js {
        api,
        message: format!("{:?}", value),
    }
}

pub fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// First element matching `selector`
pub fn query(selector: &str) -> DomResult<HtmlElement> {
    document()?
        .query_selector(selector)
        .map_err(js_error("querySelector"))?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::Missing(selector.to_string()))
}

/// Every element matching `selector`, in document order
pub fn query_all(selector: &str) -> DomResult<Vec<HtmlElement>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(js_error("querySelectorAll"))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> DomResult<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(js_error("style.setProperty"))
}

pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> DomResult<()> {
    for (property, value) in properties {
        set_style(element, property, value)?;
    }
    Ok(())
}

/// Current vertical scroll offset, zero when unavailable
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(js_error("scrollY")))
        .unwrap_or(0.0)
}

/// Attach a listener that lives as long as the page
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> DomResult<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error("addEventListener"))?;

    // Leak the closure to keep it alive
    closure.forget();
    Ok(())
}

/// Observe `targets` and call `on_entry` with the index of each reported element.
///
/// The observer is returned so the caller can unobserve elements later.
pub fn observe<F>(
    targets: Vec<HtmlElement>,
    options: ObserverOptions,
    mut on_entry: F,
) -> DomResult<IntersectionObserver>
where
    F: FnMut(&IntersectionObserver, usize, &HtmlElement, bool) + 'static,
{
    let observed = targets.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target: web_sys::Node = entry.target().into();
                if let Some(index) = observed
                    .iter()
                    .position(|element| element.is_same_node(Some(&target)))
                {
                    on_entry(&observer, index, &observed[index], entry.is_intersecting());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_error("IntersectionObserver"))?;
    callback.forget();

    for element in &targets {
        observer.observe(element);
    }

    Ok(observer)
}
