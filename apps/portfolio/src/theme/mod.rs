//! Theme preference — a dark/light flag persisted on the client and applied to
//! every rendered page.
//!
//! Storage sits behind [`PreferenceStore`] so the controller never touches
//! request headers directly. Handlers use [`CookiePreferenceStore`]; tests use
//! an in-memory store.

pub mod cookie;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cookie::CookiePreferenceStore;

/// Key the preference is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parses a stored sentinel. Unknown values yield `None` and are treated
    /// as "never set" by callers.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Where the theme preference lives between visits.
pub trait PreferenceStore {
    /// The stored preference, or `None` when unset or unreadable.
    fn read(&self) -> Option<Theme>;
    fn write(&mut self, theme: Theme);
}

/// Holds the current theme for one render and persists every change.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S) -> Self {
        let theme = store.read().unwrap_or_default();
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flips the theme and persists the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.write(self.theme);
        debug!("Theme toggled to {}", self.theme.as_str());
        self.theme
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
