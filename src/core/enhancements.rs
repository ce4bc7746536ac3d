//! Optional page enhancements and their on/off switches
//!
//! The server decides which optional features are on and renders them into
//! a meta tag; the hydrated client reads that tag back with
//! [`EnhancementFlags::from_meta`].

use derive_more::Display;

/// Features that stay off unless configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Enhancement {
    /// Hero title typed word by word
    #[display("typing")]
    Typing,
    /// Loading overlay until the page has loaded
    #[display("splash")]
    Splash,
    /// Reading progress bar at the top of the viewport
    #[display("progress")]
    Progress,
    /// Dark mode toggle button
    #[display("theme")]
    Theme,
}

impl Enhancement {
    pub const ALL: [Enhancement; 4] = [
        Enhancement::Typing,
        Enhancement::Splash,
        Enhancement::Progress,
        Enhancement::Theme,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.to_string() == name)
    }
}

/// Error raised for an unknown feature name in a flag list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enhancement '{0}' (expected one of: typing, splash, progress, theme)")]
pub struct UnknownEnhancement(pub String);

/// Set of enabled optional features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnhancementFlags {
    pub typing: bool,
    pub splash: bool,
    pub progress: bool,
    pub theme: bool,
}

impl EnhancementFlags {
    /// Every optional feature off
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, enhancement: Enhancement) -> bool {
        match enhancement {
            Enhancement::Typing => self.typing,
            Enhancement::Splash => self.splash,
            Enhancement::Progress => self.progress,
            Enhancement::Theme => self.theme,
        }
    }

    pub fn enable(&mut self, enhancement: Enhancement) {
        match enhancement {
            Enhancement::Typing => self.typing = true,
            Enhancement::Splash => self.splash = true,
            Enhancement::Progress => self.progress = true,
            Enhancement::Theme => self.theme = true,
        }
    }

    /// Parse a comma-separated list such as `"typing, theme"`.
    ///
    /// Blank entries are skipped, unknown names are an error.
    pub fn parse_list(list: &str) -> Result<Self, UnknownEnhancement> {
        let mut flags = Self::none();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let enhancement = Enhancement::from_name(&name.to_ascii_lowercase())
                .ok_or_else(|| UnknownEnhancement(name.to_string()))?;
            flags.enable(enhancement);
        }
        Ok(flags)
    }

    /// Lenient parse of the meta tag content; unknown names are dropped
    pub fn from_meta(content: &str) -> Self {
        let mut flags = Self::none();
        for enhancement in content
            .split(',')
            .filter_map(|name| Enhancement::from_name(name.trim()))
        {
            flags.enable(enhancement);
        }
        flags
    }

    /// Content of the meta tag published to the client
    pub fn to_meta(&self) -> String {
        Enhancement::ALL
            .iter()
            .filter(|e| self.is_enabled(**e))
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let flags = EnhancementFlags::default();
        for enhancement in Enhancement::ALL {
            assert!(!flags.is_enabled(enhancement));
        }
        assert_eq!(flags.to_meta(), "");
    }

    #[test]
    fn test_parse_list() {
        let flags = EnhancementFlags::parse_list("typing, Theme,,").unwrap();
        assert!(flags.typing);
        assert!(flags.theme);
        assert!(!flags.splash);
        assert!(!flags.progress);
    }

    #[test]
    fn test_parse_list_rejects_unknown_names() {
        let err = EnhancementFlags::parse_list("typing,confetti").unwrap_err();
        assert_eq!(err, UnknownEnhancement("confetti".to_string()));
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(
            EnhancementFlags::parse_list("").unwrap(),
            EnhancementFlags::none()
        );
    }

    #[test]
    fn test_meta_round_trip() {
        let flags = EnhancementFlags {
            typing: false,
            splash: true,
            progress: true,
            theme: false,
        };
        assert_eq!(flags.to_meta(), "splash,progress");
        assert_eq!(EnhancementFlags::from_meta(&flags.to_meta()), flags);
    }

    #[test]
    fn test_from_meta_ignores_unknown_names() {
        let flags = EnhancementFlags::from_meta("theme,sparkles");
        assert!(flags.theme);
        assert!(!flags.typing);
    }
}
