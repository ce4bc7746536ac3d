use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteSettings;
use crate::core::site::{CONTACT_META_NAME, ENHANCEMENTS_META_NAME};
use crate::ui::{HomePage, NotFoundPage};

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Document shell rendered by the server
///
/// Settings come from the request context; without one every optional
/// enhancement stays off.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let enhancements = settings.enhancements.to_meta();
    let contact_email = settings.contact_email.clone().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // read back by the client before hydrating
                <meta name=ENHANCEMENTS_META_NAME content=enhancements/>
                <meta name=CONTACT_META_NAME content=contact_email/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App settings/>
            </body>
        </html>
    }
}

#[component]
pub fn App(
    /// Settings published by the server
    #[prop(optional)]
    settings: SiteSettings,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Link rel="stylesheet" href=FONT_AWESOME_CSS/>
        <Title text="Ariatek Studio"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route
                    path=path!("/")
                    view=move || view! { <HomePage settings=settings.clone() /> }
                />
            </Routes>
        </Router>
    }
}
