//! Settings rendered by the server and read back at hydration

use crate::core::enhancements::EnhancementFlags;

/// Address shown when none is configured
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@ariatek.studio";

/// `name` of the meta tag listing enabled enhancements
pub const ENHANCEMENTS_META_NAME: &str = "ariatek-enhancements";

/// `name` of the meta tag carrying the contact address
pub const CONTACT_META_NAME: &str = "ariatek-contact";

/// Everything the page needs from the server configuration
///
/// Both sides must render with the same value, so the server publishes it
/// in meta tags and the client parses them before hydrating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteSettings {
    pub enhancements: EnhancementFlags,
    pub contact_email: Option<String>,
}

impl SiteSettings {
    pub fn new(enhancements: EnhancementFlags, contact_email: Option<String>) -> Self {
        Self {
            enhancements,
            contact_email: contact_email.filter(|email| !email.trim().is_empty()),
        }
    }

    /// Rebuild settings from the meta tag contents
    pub fn from_meta(enhancements: Option<&str>, contact_email: Option<String>) -> Self {
        Self::new(
            enhancements.map(EnhancementFlags::from_meta).unwrap_or_default(),
            contact_email,
        )
    }

    pub fn contact_email(&self) -> &str {
        self.contact_email.as_deref().unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contact_email() {
        let settings = SiteSettings::default();
        assert_eq!(settings.contact_email(), DEFAULT_CONTACT_EMAIL);
        assert_eq!(settings.mailto(), "mailto:hello@ariatek.studio");
    }

    #[test]
    fn test_blank_email_falls_back() {
        let settings = SiteSettings::new(EnhancementFlags::none(), Some("  ".to_string()));
        assert_eq!(settings.contact_email, None);
        assert_eq!(settings.contact_email(), DEFAULT_CONTACT_EMAIL);
    }

    #[test]
    fn test_meta_round_trip() {
        let mut flags = EnhancementFlags::none();
        flags.splash = true;
        flags.theme = true;
        let server = SiteSettings::new(flags, Some("team@example.com".to_string()));

        let meta = server.enhancements.to_meta();
        let client = SiteSettings::from_meta(Some(&meta), server.contact_email.clone());

        assert_eq!(client, server);
    }

    #[test]
    fn test_missing_meta_disables_everything() {
        let settings = SiteSettings::from_meta(None, None);
        assert_eq!(settings.enhancements, EnhancementFlags::none());
    }
}
