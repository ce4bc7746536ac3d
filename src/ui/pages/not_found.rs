//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Ariatek Studio" />

        <section class="not-found section">
            <div class="container not-found__container">
                <Icon name=icons::COMPASS class="not-found__icon" />

                // Error code
                <h1 class="not-found__code">"404"</h1>

                <h2 class="section__title">"Page Not Found"</h2>
                <p class="section__subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn btn--primary">
                    "Back to Home"
                </A>
            </div>
        </section>
    }
}
