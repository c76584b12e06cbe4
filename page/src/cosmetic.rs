//! Stateless cosmetic helpers: cursor follower, console banner, load timer.

#[cfg(test)]
#[path = "cosmetic_test.rs"]
mod cosmetic_test;

use crate::config::BannerConfig;
use crate::consts::CURSOR_RADIUS_PX;
use crate::surface::Surface;

/// Keeps a small dot centered under the pointer.
#[derive(Debug, Clone, Copy)]
pub struct CursorFollower {
    enabled: bool,
}

impl CursorFollower {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn on_pointer_move(&self, x: f64, y: f64, surface: &mut impl Surface) {
        if self.enabled {
            surface.place_cursor(x - CURSOR_RADIUS_PX, y - CURSOR_RADIUS_PX);
        }
    }
}

/// Console greeting printed once at startup.
#[derive(Debug, Clone)]
pub struct WelcomeBanner<'a> {
    config: &'a BannerConfig,
}

impl<'a> WelcomeBanner<'a> {
    #[must_use]
    pub fn new(config: &'a BannerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = match self.config.owner.as_deref() {
            Some(owner) => format!("Welcome to {owner}'s Modern Portfolio!\n"),
            None => "Welcome to the portfolio!\n".to_owned(),
        };
        if !self.config.features.is_empty() {
            out.push_str("\nFeatures:\n");
            for feature in &self.config.features {
                out.push_str(&format!("  - {feature}\n"));
            }
        }
        if let Some(contact) = self.config.contact.as_deref() {
            out.push_str("\nLet's connect: ");
            out.push_str(contact);
            out.push('\n');
        }
        out
    }
}

/// Reports slow page loads.
#[derive(Debug, Clone, Copy)]
pub struct LoadTimer {
    slow_ms: f64,
}

impl LoadTimer {
    #[must_use]
    pub fn new(slow_ms: f64) -> Self {
        Self { slow_ms }
    }

    /// Warning text when `elapsed_ms` exceeds the threshold.
    #[must_use]
    pub fn check(&self, elapsed_ms: f64) -> Option<String> {
        (elapsed_ms > self.slow_ms)
            .then(|| format!("page load time is above {} seconds: {elapsed_ms:.2}ms", self.slow_ms / 1000.0))
    }
}
