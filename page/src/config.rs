//! Page tunables and the DOM selector table.
//!
//! Every field has a default matching the stock page markup, so an empty JSON
//! object (or no override at all) yields a working configuration. The host
//! reads overrides from a `<script type="application/json" id="page-config">`
//! element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACTIVE_LOOK_AHEAD_PX, BACK_TO_TOP_THRESHOLD_PX, HOVER_LIFT_PX, PAGE_FADE_MS, PARALLAX_FACTOR,
    RESIZE_DEBOUNCE_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SLOW_LOAD_MS, THEME_STORAGE_KEY,
};
use crate::error::PageError;

/// Element id of the JSON config override.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key for the theme preference.
    pub storage_key: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub cosmetic: CosmeticConfig,
    pub banner: BannerConfig,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            log_level: "info".to_owned(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            cosmetic: CosmeticConfig::default(),
            banner: BannerConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if `raw` is not valid JSON or a field has
    /// the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config = serde_json::from_str::<Self>(raw)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub look_ahead_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { look_ahead_px: ACTIVE_LOOK_AHEAD_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub back_to_top_threshold_px: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX, parallax_factor: PARALLAX_FACTOR }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub fade_ms: u32,
    pub hover_lift_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            fade_ms: PAGE_FADE_MS,
            hover_lift_px: HOVER_LIFT_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmeticConfig {
    pub cursor_follower: bool,
    pub slow_load_ms: f64,
    pub resize_debounce_ms: u32,
}

impl Default for CosmeticConfig {
    fn default() -> Self {
        Self { cursor_follower: true, slow_load_ms: SLOW_LOAD_MS, resize_debounce_ms: RESIZE_DEBOUNCE_MS }
    }
}

/// Text for the console welcome banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub owner: Option<String>,
    pub contact: Option<String>,
    pub features: Vec<String>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            owner: None,
            contact: None,
            features: [
                "Glassmorphism Design",
                "Dynamic Gradients",
                "Advanced Animations",
                "Responsive Layout",
                "Dark/Light Mode",
                "Modern CSS Grid & Flexbox",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

/// Element ids (bare names) and CSS selectors the host binds to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    pub floating_theme_toggle_id: String,
    pub floating_theme_icon_id: String,
    pub menu_button_id: String,
    pub nav_panel_id: String,
    pub back_to_top_id: String,
    pub header: String,
    pub hero: String,
    pub reveal: String,
    pub hover: String,
    pub sections: String,
    pub nav_links: String,
    pub anchors: String,
    pub lazy_images: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".to_owned(),
            theme_icon_id: "themeIcon".to_owned(),
            floating_theme_toggle_id: "floatingThemeToggle".to_owned(),
            floating_theme_icon_id: "floatingThemeIcon".to_owned(),
            menu_button_id: "mobileMenuBtn".to_owned(),
            nav_panel_id: "navLinks".to_owned(),
            back_to_top_id: "backToTop".to_owned(),
            header: "header".to_owned(),
            hero: ".hero-content".to_owned(),
            reveal: ".fade-in".to_owned(),
            hover: ".btn, .project-link, .glass-card".to_owned(),
            sections: "section[id]".to_owned(),
            nav_links: ".nav-links a".to_owned(),
            anchors: "a[href^=\"#\"]".to_owned(),
            lazy_images: "img[data-src]".to_owned(),
        }
    }
}
