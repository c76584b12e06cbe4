//! Light/dark preference.
//!
//! The preference is persisted as a JSON string (`"light"` or `"dark"`) under
//! a single storage key. Anything missing or unreadable means light. Writes
//! are best-effort: a refused write is logged and the in-memory value stays
//! authoritative for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::storage::PreferenceStore;
use crate::surface::Surface;

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon class for the toggle: the icon shows the mode you would switch to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Text label for the toggle, naming the mode you would switch to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    /// Decode a stored value, falling back to light on anything unexpected.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(raw) {
            Ok(theme) => theme,
            Err(e) => {
                log::debug!("ignoring stored theme {raw:?}: {e}");
                Self::default()
            }
        }
    }
}

/// Owns the current theme and keeps surface and store in step with it.
#[derive(Debug, Clone)]
pub struct ThemeController {
    key: String,
    current: Theme,
}

impl ThemeController {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), current: Theme::default() }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Load the persisted preference and paint it. Never writes to the store.
    pub fn initialize(&mut self, store: &impl PreferenceStore, surface: &mut impl Surface) -> Theme {
        self.current = Theme::from_stored(store.load(&self.key).as_deref());
        self.apply(surface);
        self.current
    }

    /// Flip the theme, paint it, then persist it.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore, surface: &mut impl Surface) -> Theme {
        self.current = self.current.toggled();
        self.apply(surface);
        self.persist(store);
        self.current
    }

    fn apply(&self, surface: &mut impl Surface) {
        surface.apply_theme(self.current);
        surface.set_theme_indicator(self.current.icon_class(), self.current.toggle_label());
    }

    fn persist(&self, store: &mut impl PreferenceStore) {
        let encoded = match serde_json::to_string(&self.current) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("theme not persisted: {e}");
                return;
            }
        };
        if let Err(e) = store.save(&self.key, &encoded) {
            log::warn!("theme not persisted: {e}");
        }
    }
}
