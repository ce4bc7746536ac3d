//! In-page navigation: where to scroll and which link is active

/// Scroll offset that puts the top of a section just below the fixed header
pub fn scroll_target(section_offset_top: f64, header_height: f64) -> f64 {
    section_offset_top - header_height
}

/// Whether a link's `href` points inside the page
pub fn is_in_page_href(href: &str) -> bool {
    href.starts_with('#')
}

/// Whether a link should carry the active marker after navigating to `target_id`
pub fn is_active_link(href: Option<&str>, target_id: &str) -> bool {
    href == Some(target_id)
}
