//! Theme context module for the optional dark mode toggle
//!
//! Provides:
//! - ThemeMode enum (Light, Dark)
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence under the `theme` key
//! - ThemeToggle floating button

use leptos::prelude::*;

use crate::core::selectors;
use crate::ui::icon::{Icon, icons};

/// LocalStorage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` selects the dark theme
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon shown on the toggle: a sun while dark, a moon while light
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => icons::MOON,
            ThemeMode::Dark => icons::SUN,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Switch between light and dark, then persist the choice
    pub fn toggle(&self) {
        let mode = self.mode.get_untracked().toggled();
        self.mode.set(mode);
        persist_theme(mode);
    }
}

/// Persist theme to localStorage
fn persist_theme(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(Some(storage)) = window.local_storage()
        {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Ok(Some(storage)) = window.local_storage()
            && let Ok(value) = storage.get_item(THEME_STORAGE_KEY)
        {
            return ThemeMode::from_stored(value.as_deref());
        }
    }
    ThemeMode::Light
}

/// Apply or remove the dark theme class on `<body>`
fn apply_theme_class(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let class_list = body.class_list();
            let _ = match mode {
                ThemeMode::Dark => class_list.add_1(selectors::DARK_THEME_CLASS),
                ThemeMode::Light => class_list.remove_1(selectors::DARK_THEME_CLASS),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mode, selectors::DARK_THEME_CLASS);
    }
}

/// Provide theme context to the application
///
/// Reads the stored preference once; the body class follows every change.
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Light);
    let ctx = ThemeContext { mode };

    // Storage is only reachable after hydration
    Effect::new(move |_| {
        mode.set(load_persisted_theme());
    });

    Effect::new(move |_| {
        apply_theme_class(mode.get());
    });

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

/// Floating dark mode toggle
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context().unwrap_or_else(provide_theme_context);

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle dark mode"
        >
            {move || view! { <Icon name=theme.mode.get().toggle_icon() /> }}
        </button>
    }
}
