//! Reveal-on-scroll and the page fade-in.
//!
//! Each observed element carries a one-way visibility flag: the first
//! intersection sets it and nothing ever clears it. Newly revealed keys are
//! handed back so the host can stop observing them.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::surface::{ElementKey, Surface, Target};

/// Intersection observer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverSpec {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub key: ElementKey,
    pub is_intersecting: bool,
}

impl Intersection {
    #[must_use]
    pub fn new(key: ElementKey, is_intersecting: bool) -> Self {
        Self { key, is_intersecting }
    }
}

#[derive(Debug, Clone)]
pub struct RevealController {
    spec: ObserverSpec,
    fade_ms: u32,
    revealed: HashSet<ElementKey>,
}

impl RevealController {
    #[must_use]
    pub fn new(spec: ObserverSpec, fade_ms: u32) -> Self {
        Self { spec, fade_ms, revealed: HashSet::new() }
    }

    #[must_use]
    pub fn observer_spec(&self) -> &ObserverSpec {
        &self.spec
    }

    #[must_use]
    pub fn is_revealed(&self, key: ElementKey) -> bool {
        self.revealed.contains(&key)
    }

    /// Flag every intersecting entry seen for the first time. Returns the keys
    /// that were revealed by this batch.
    pub fn on_intersection(&mut self, entries: &[Intersection], surface: &mut impl Surface) -> Vec<ElementKey> {
        let mut newly = Vec::new();
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if self.revealed.insert(entry.key) {
                surface.set_visible(Target::Element(entry.key), true);
                newly.push(entry.key);
            }
        }
        newly
    }

    /// Hide the page until `load` so the first layout pass is not seen.
    pub fn on_ready(&self, surface: &mut impl Surface) {
        surface.set_opacity(Target::Page, 0.0, None);
    }

    pub fn on_load(&self, surface: &mut impl Surface) {
        surface.set_opacity(Target::Page, 1.0, Some(self.fade_ms));
    }
}
