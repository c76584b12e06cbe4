//! Deferred image sources.
//!
//! Images carrying `data-src` are observed; the first time one intersects,
//! its real source is swapped in and it is never observed again.

use std::collections::HashSet;

use crate::reveal::Intersection;
use crate::surface::{ElementKey, Surface};

#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    loaded: HashSet<ElementKey>,
}

impl LazyImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loaded(&self, key: ElementKey) -> bool {
        self.loaded.contains(&key)
    }

    /// Load every intersecting image not loaded yet; returns the keys to unobserve.
    pub fn on_intersection(&mut self, entries: &[Intersection], surface: &mut impl Surface) -> Vec<ElementKey> {
        let mut newly = Vec::new();
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if self.loaded.insert(entry.key) {
                surface.load_image(entry.key);
                newly.push(entry.key);
            }
        }
        newly
    }
}
