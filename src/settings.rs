//! Page config loading.
//!
//! The page may embed a JSON override as
//! `<script type="application/json" id="page-config">`. Absent means defaults;
//! malformed is an error the caller logs before falling back to defaults.

#[cfg(feature = "hydrate")]
use page::config::CONFIG_ELEMENT_ID;
use page::config::PageConfig;
use page::error::PageError;

/// Read the embedded config override, if any.
///
/// # Errors
///
/// Returns [`PageError::Config`] when the override is present but not valid.
pub fn load_page_config() -> Result<PageConfig, PageError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
            _ => Ok(PageConfig::default()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(PageConfig::default())
    }
}

/// Parse the configured console level, defaulting to `info`.
#[must_use]
pub fn log_level(config: &PageConfig) -> log::Level {
    config.log_level.parse().unwrap_or(log::Level::Info)
}
