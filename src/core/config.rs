//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::enhancements::{EnhancementFlags, UnknownEnhancement};
use crate::core::site::SiteSettings;

/// Environment variable listing the optional enhancements to enable
pub const ENHANCEMENTS_VAR: &str = "ARIATEK_ENHANCEMENTS";

/// Environment variable with the address shown in the contact section
pub const CONTACT_EMAIL_VAR: &str = "ARIATEK_CONTACT_EMAIL";

/// Errors found while reading the configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ARIATEK_ENHANCEMENTS: {0}")]
    Enhancements(#[from] UnknownEnhancement),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional features published to the client
    pub enhancements: EnhancementFlags,

    /// Public contact address
    /// Example: hello@ariatek.studio
    pub contact_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// An invalid enhancement list is logged and every enhancement stays off.
    pub fn from_env() -> Self {
        let enhancements = std::env::var(ENHANCEMENTS_VAR).ok();
        let contact_email = std::env::var(CONTACT_EMAIL_VAR).ok();

        match Self::from_values(enhancements.as_deref(), contact_email.clone()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{}; optional enhancements disabled", err);
                Self::from_values(None, contact_email).unwrap_or_default()
            }
        }
    }

    /// Build a configuration from raw variable values
    pub fn from_values(
        enhancements: Option<&str>,
        contact_email: Option<String>,
    ) -> Result<Self, ConfigError> {
        let enhancements = match enhancements {
            Some(list) => EnhancementFlags::parse_list(list)?,
            None => EnhancementFlags::none(),
        };

        Ok(Self {
            enhancements,
            contact_email: contact_email.filter(|email| !email.trim().is_empty()),
        })
    }

    /// Check if a contact address is configured
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    /// Settings rendered into every page
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings::new(self.enhancements, self.contact_email.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.enhancements, EnhancementFlags::none());
        assert!(!config.has_contact_email());
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_values(
            Some("typing,splash,progress,theme"),
            Some("hello@ariatek.studio".to_string()),
        )
        .unwrap();

        assert!(config.enhancements.typing);
        assert!(config.enhancements.splash);
        assert!(config.enhancements.progress);
        assert!(config.enhancements.theme);
        assert_eq!(
            config.contact_email,
            Some("hello@ariatek.studio".to_string())
        );
    }

    #[test]
    fn test_blank_contact_email_is_ignored() {
        let config = Config::from_values(None, Some("  ".to_string())).unwrap();
        assert!(config.contact_email.is_none());
    }

    #[test]
    fn test_unknown_enhancement_is_an_error() {
        let err = Config::from_values(Some("theme,fireworks"), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Enhancements(UnknownEnhancement("fireworks".to_string()))
        );
        assert!(err.to_string().starts_with("ARIATEK_ENHANCEMENTS: unknown enhancement"));
    }

    #[test]
    fn test_site_settings_carry_config() {
        let config =
            Config::from_values(Some("progress"), Some("team@ariatek.studio".to_string())).unwrap();
        let settings = config.site_settings();
        assert!(settings.enhancements.progress);
        assert_eq!(settings.contact_email(), "team@ariatek.studio");
    }

    #[test]
    fn test_config_clone() {
        let config = Config::from_values(Some("theme"), None).unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.enhancements, config.enhancements);
    }
}
