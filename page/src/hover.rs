//! Hover lift for buttons, project links and cards.
//!
//! The element's own inline transform is captured by the host at
//! registration and treated as the base. Entering writes the base followed by
//! the lift; leaving writes the base back verbatim. A per-element flag makes
//! repeated enter or leave events idempotent.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use std::collections::HashSet;

use crate::surface::{ElementKey, Layout, Surface, Target};

/// Compose `base` with an upward translation of `lift_px`.
#[must_use]
pub fn lifted_transform(base: &str, lift_px: f64) -> String {
    let base = base.trim();
    let lift = format!("translateY({}px)", -lift_px);
    if base.is_empty() || base == "none" { lift } else { format!("{base} {lift}") }
}

#[derive(Debug, Clone)]
pub struct HoverNudge {
    lift_px: f64,
    lifted: HashSet<ElementKey>,
}

impl HoverNudge {
    #[must_use]
    pub fn new(lift_px: f64) -> Self {
        Self { lift_px, lifted: HashSet::new() }
    }

    #[must_use]
    pub fn is_lifted(&self, key: ElementKey) -> bool {
        self.lifted.contains(&key)
    }

    pub fn on_enter<H>(&mut self, key: ElementKey, host: &mut H)
    where
        H: Surface + Layout,
    {
        if !self.lifted.insert(key) {
            return;
        }
        let transform = lifted_transform(&host.base_transform(key), self.lift_px);
        host.set_transform(Target::Element(key), &transform);
    }

    pub fn on_leave<H>(&mut self, key: ElementKey, host: &mut H)
    where
        H: Surface + Layout,
    {
        if !self.lifted.remove(&key) {
            return;
        }
        let base = host.base_transform(key);
        host.set_transform(Target::Element(key), &base);
    }
}
