//! Element registry behind [`ElementKey`].
//!
//! Keys are slot indices. An element carries its key in markup, so a claimed
//! key is honored only when its slot already holds that same element; markup
//! that arrives with a key of its own gets a fresh slot.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use page::error::PageError;
use page::surface::ElementKey;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    base_transform: String,
}

#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: PartialEq> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `claimed`, if its slot holds `item`.
    #[must_use]
    pub fn find(&self, claimed: Option<ElementKey>, item: &T) -> Option<ElementKey> {
        claimed.filter(|key| self.get(*key) == Some(item))
    }

    /// Key the next [`Registry::push`] will assign.
    ///
    /// # Errors
    ///
    /// [`PageError::Dom`] once the key space is exhausted.
    pub fn next_key(&self) -> Result<ElementKey, PageError> {
        u32::try_from(self.entries.len())
            .map(ElementKey)
            .map_err(|_| PageError::Dom("element registry full".to_owned()))
    }

    pub fn push(&mut self, item: T, base_transform: String) {
        self.entries.push(Entry { item, base_transform });
    }

    #[must_use]
    pub fn get(&self, key: ElementKey) -> Option<&T> {
        self.entry(key).map(|e| &e.item)
    }

    /// Inline transform captured when `key` was registered.
    #[must_use]
    pub fn base_transform(&self, key: ElementKey) -> Option<&str> {
        self.entry(key).map(|e| e.base_transform.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, key: ElementKey) -> Option<&Entry<T>> {
        usize::try_from(key.0).ok().and_then(|i| self.entries.get(i))
    }
}
