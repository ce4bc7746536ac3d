//! Loading splash fade-out

use gloo_timers::callback::Timeout;
use web_sys::{Event, HtmlElement};

use crate::core::progress::{SPLASH_FADE_MS, SPLASH_HOLD_MS};
use crate::core::selectors;
use crate::ui::dom::{self, DomResult};

/// Fade the overlay out once the page has finished loading
pub fn install() -> DomResult<()> {
    let overlay = dom::query(selectors::LOADING_OVERLAY)?;

    // The bundle may hydrate after `load` already fired
    if dom::document()?.ready_state() == "complete" {
        dismiss(overlay);
        return Ok(());
    }

    let mut overlay = Some(overlay);
    dom::listen(&*dom::window()?, "load", move |_: Event| {
        if let Some(overlay) = overlay.take() {
            dismiss(overlay);
        }
    })
}

fn dismiss(overlay: HtmlElement) {
    Timeout::new(SPLASH_HOLD_MS, move || {
        let _ = dom::set_style(&overlay, "opacity", "0");
        Timeout::new(SPLASH_FADE_MS, move || overlay.remove()).forget();
    })
    .forget();
}
