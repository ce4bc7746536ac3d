use leptos::prelude::*;

/// Font Awesome solid icon
#[component]
pub fn Icon(
    /// Icon name without the `fa-` prefix
    name: &'static str,
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("fas fa-{} {}", name, class);

    view! {
        <i class=classes.trim_end().to_string() aria-hidden="true"></i>
    }
}

/// Icons used across the site
pub mod icons {
    pub const MOON: &str = "moon";
    pub const SUN: &str = "sun";
    pub const CODE: &str = "code";
    pub const MOBILE: &str = "mobile-alt";
    pub const PALETTE: &str = "palette";
    pub const CHART: &str = "chart-line";
    pub const CLOUD: &str = "cloud";
    pub const SHIELD: &str = "shield-alt";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const USERS: &str = "users";
    pub const STAR: &str = "star";
    pub const CHECK: &str = "check";
    pub const ENVELOPE: &str = "envelope";
    pub const PHONE: &str = "phone";
    pub const MAP_MARKER: &str = "map-marker-alt";
    pub const COMPASS: &str = "compass";
}
