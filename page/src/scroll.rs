//! Back-to-top visibility and hero parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::surface::{Surface, Target};

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    threshold: f64,
    parallax_factor: f64,
    back_to_top_visible: bool,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(threshold: f64, parallax_factor: f64) -> Self {
        Self { threshold, parallax_factor, back_to_top_visible: false }
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    /// Apply both scroll effects for the current offset.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, surface: &mut impl Surface) {
        self.update_back_to_top(scroll_y, surface);
        self.update_parallax(scroll_y, viewport_height, surface);
    }

    /// Show the control strictly above the threshold. Writes only on a change.
    pub fn update_back_to_top(&mut self, scroll_y: f64, surface: &mut impl Surface) -> bool {
        let visible = scroll_y > self.threshold;
        if visible != self.back_to_top_visible {
            self.back_to_top_visible = visible;
            surface.set_visible(Target::BackToTop, visible);
        }
        visible
    }

    /// Translate the hero while it is still within the first viewport.
    /// Returns the applied offset, or `None` once scrolled past.
    pub fn update_parallax(&self, scroll_y: f64, viewport_height: f64, surface: &mut impl Surface) -> Option<f64> {
        if scroll_y >= viewport_height {
            return None;
        }
        let offset = scroll_y * self.parallax_factor;
        surface.set_transform(Target::Hero, &format!("translateY({offset}px)"));
        Some(offset)
    }

    pub fn back_to_top_clicked(&self, surface: &mut impl Surface) {
        surface.scroll_to(0.0);
    }
}
