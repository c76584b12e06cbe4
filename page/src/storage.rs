//! Key-value persistence for the one stored preference.

use std::collections::HashMap;

use crate::error::PageError;

/// A string key-value store that survives page reloads.
///
/// The browser host backs this with `localStorage`; tests use [`MemoryStore`].
pub trait PreferenceStore {
    /// Read the raw value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the backend refuses the write
    /// (quota exceeded, storage disabled).
    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// In-memory store. Optionally refuses writes to model a full or denied backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: HashMap::new(), read_only: true }
    }

    /// Seed an entry directly, bypassing `read_only`.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        if self.read_only {
            return Err(PageError::Storage(format!("write to {key} refused")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
