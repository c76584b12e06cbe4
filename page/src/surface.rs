//! Presentation seams between the controllers and the rendering surface.
//!
//! Controllers never touch the DOM. They read geometry through [`Layout`] and
//! write presentation state through [`Surface`]. The browser host implements
//! both over `web-sys`; tests use a recording fake.

use crate::theme::Theme;

/// Opaque handle for an element registered by the host (reveal targets,
/// hover targets, lazy images). Keys are stable for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(pub u32);

/// Which element a presentation write applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The document body.
    Page,
    /// The hero content block that receives the parallax offset.
    Hero,
    /// The floating back-to-top control.
    BackToTop,
    /// The cursor follower dot.
    Cursor,
    /// A registered element.
    Element(ElementKey),
}

/// A page section and its document offset, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Write side of the page: the only way controllers change what is rendered.
pub trait Surface {
    /// Set or clear the root presentation attribute.
    fn apply_theme(&mut self, theme: Theme);

    /// Update every theme toggle's icon class and text label.
    fn set_theme_indicator(&mut self, icon: &str, label: &str);

    /// Open or close the mobile navigation panel and swap the menu icon.
    fn set_disclosure(&mut self, open: bool, icon: &str);

    /// Mark the navigation link for `section` active and clear all others.
    /// `None` clears every link.
    fn set_active_link(&mut self, section: Option<&str>);

    /// Add or remove the `visible` class.
    fn set_visible(&mut self, target: Target, visible: bool);

    /// Replace the inline `transform` style.
    fn set_transform(&mut self, target: Target, transform: &str);

    /// Set inline opacity, with an optional CSS transition duration.
    fn set_opacity(&mut self, target: Target, opacity: f64, transition_ms: Option<u32>);

    /// Smooth-scroll the window to the given vertical offset.
    fn scroll_to(&mut self, top: f64);

    /// Move the cursor follower, creating it on first use.
    fn place_cursor(&mut self, left: f64, top: f64);

    /// Swap a deferred image's `data-src` into `src`.
    fn load_image(&mut self, key: ElementKey);
}

/// Read side of the page.
pub trait Layout {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Height of the visual viewport.
    fn viewport_height(&self) -> f64;

    /// Height of the fixed header, subtracted from anchor targets.
    fn header_height(&self) -> f64;

    /// Document offset of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// All identified sections in document order.
    fn sections(&self) -> Vec<Section>;

    /// Inline transform the element carried when it was registered.
    fn base_transform(&self, key: ElementKey) -> String;
}
