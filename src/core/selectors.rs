//! DOM contract shared by the page markup and the enhancement layer
//!
//! Every enhancement finds its elements through these selectors. The page
//! components in `ui::pages` render the same class names, so the two sides
//! stay in sync through this module only.

/// Fixed site header
pub const HEADER: &str = ".header";

/// Every navigation link, used when moving the active marker
pub const NAV_LINK: &str = ".nav__link";

/// Navigation links pointing inside the page
pub const NAV_IN_PAGE_LINK: &str = ".nav__link[href^=\"#\"]";

/// Class marking the navigation link of the current section
pub const NAV_ACTIVE_CLASS: &str = "active";

/// Cards that fade in when scrolled into view
pub const REVEAL_TARGETS: &str =
    ".service__card, .portfolio__item, .pricing__card, .testimonial__card, .about__values .value";

/// Class added to a card once it has been revealed
pub const REVEALED_CLASS: &str = "fade-in-up";

/// Hero statistics animated from zero
pub const STAT_NUMBER: &str = ".stat__number";

/// Decorative hero cards moved by the parallax decorator
pub const FLOATING_CARD: &str = ".floating-card";

pub const SERVICE_CARD: &str = ".service__card";
pub const PORTFOLIO_ITEM: &str = ".portfolio__item";
pub const PRICING_CARD: &str = ".pricing__card";

/// Pricing cards with this class keep their transform on hover
pub const PRICING_FEATURED_CLASS: &str = "pricing__card--featured";

/// Inline validation message rendered under a form field
pub const FIELD_ERROR_CLASS: &str = "field-error";

/// Hero headline rewritten by the typing effect
pub const HERO_TITLE: &str = ".hero__title";

/// Loading splash overlay
pub const LOADING_OVERLAY: &str = ".loading-overlay";

/// Filled part of the scroll-progress bar
pub const SCROLL_PROGRESS_BAR: &str = ".scroll-progress__bar";

/// Class toggled on `<body>` while the dark theme is active
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Meta tag carrying the enabled optional features
pub const ENHANCEMENTS_META: &str = "meta[name=\"ariatek-enhancements\"]";

/// Meta tag carrying the contact address
pub const CONTACT_META: &str = "meta[name=\"ariatek-contact\"]";

/// Symbolic design tokens used for inline form feedback
pub mod tokens {
    pub const ERROR_COLOR: &str = "var(--error-color)";
    pub const BORDER_COLOR: &str = "var(--border-color)";
    pub const SUCCESS_COLOR: &str = "var(--success-color)";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_and_class_names() {
        for selector in [HEADER, NAV_LINK, STAT_NUMBER, FLOATING_CARD, LOADING_OVERLAY] {
            assert!(selector.starts_with('.'), "{selector}");
        }
        for class in [NAV_ACTIVE_CLASS, REVEALED_CLASS, FIELD_ERROR_CLASS, DARK_THEME_CLASS] {
            assert!(!class.starts_with('.'), "{class}");
        }
        assert!(PRICING_CARD.ends_with(PRICING_FEATURED_CLASS.trim_end_matches("--featured")));
    }
}
