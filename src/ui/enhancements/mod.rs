//! Client-side page enhancements
//!
//! The [`Enhancements`] component installs every behavior once the page has
//! hydrated: navigation scrolling, card reveals, header tracking, counters,
//! parallax, hover lifts and whichever optional features are enabled.
//! Each installer finds its elements through `core::selectors`; when they are
//! missing the behavior is skipped and a debug warning is logged.

use leptos::prelude::*;

use crate::core::EnhancementFlags;

#[cfg(feature = "hydrate")]
mod hover;
#[cfg(feature = "hydrate")]
mod navigation;
#[cfg(feature = "hydrate")]
mod observers;
#[cfg(feature = "hydrate")]
mod scroll;
#[cfg(feature = "hydrate")]
mod splash;
#[cfg(feature = "hydrate")]
mod typing;

/// Installs the enhancement layer after hydration
///
/// Renders nothing.
#[component]
pub fn Enhancements(flags: EnhancementFlags) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| install(flags));
    }

    #[cfg(not(feature = "hydrate"))]
    {
        // Server render: enhancements only exist in the browser
        let _ = flags;
    }
}

#[cfg(feature = "hydrate")]
fn install(flags: EnhancementFlags) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::controller::{PageController, PageLayout};
    use crate::core::selectors;
    use crate::ui::dom;

    let reveal_targets = dom::query_all(selectors::REVEAL_TARGETS).unwrap_or_default();
    let counters = dom::query_all(selectors::STAT_NUMBER).unwrap_or_default();
    let floating_cards = dom::query_all(selectors::FLOATING_CARD).unwrap_or_default();

    let layout = PageLayout {
        reveal_targets: reveal_targets.len(),
        counters: counters.len(),
        floating_cards: floating_cards.len(),
        initial_scroll_y: dom::scroll_y(),
        progress_bar: flags.progress,
    };
    let controller = Rc::new(RefCell::new(PageController::new(layout)));

    report("navigation", navigation::install());
    report(
        "reveal",
        observers::install_reveal(controller.clone(), reveal_targets),
    );
    report(
        "scroll",
        scroll::install(controller.clone(), floating_cards, flags.progress),
    );
    report("counters", observers::install_counters(controller, counters));
    report("hover", hover::install());

    if flags.typing {
        report("typing", typing::install());
    }
    if flags.splash {
        report("splash", splash::install());
    }

    leptos::logging::log!(
        "Enhancements installed: {} cards, {} counters, {} floating cards, optional [{}]",
        layout.reveal_targets,
        layout.counters,
        layout.floating_cards,
        flags.to_meta()
    );
}

#[cfg(feature = "hydrate")]
fn report(component: &str, result: crate::ui::dom::DomResult<()>) {
    if let Err(err) = result {
        leptos::logging::debug_warn!("{} enhancement skipped: {}", component, err);
    }
}
