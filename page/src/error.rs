//! Error type shared by the page controllers and their host.

/// Failures surfaced while binding or driving the page.
///
/// None of these reach the visitor; they are logged and the affected
/// controller is skipped.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element missing: {name}")]
    MissingElement { name: String },
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl PageError {
    /// Shorthand for [`PageError::MissingElement`].
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingElement { name: name.into() }
    }
}
