//! Browser events as plain values.
//!
//! The host translates each DOM event it listens for into a [`PageEvent`] and
//! hands it to [`crate::app::Page::handle`]. The returned [`Outcome`] carries
//! the few things only the host can do: cancelling the browser default and
//! unobserving elements that no longer need intersection callbacks.

use crate::keys::KeyPress;
use crate::reveal::Intersection;
use crate::surface::ElementKey;

/// Which intersection observer produced a batch of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverKind {
    Reveal,
    LazyImages,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Document structure is ready (`DOMContentLoaded`).
    Ready,
    /// All resources finished loading.
    Load { elapsed_ms: f64 },
    Scroll,
    /// A burst of resize events has settled.
    Resize,
    Key(KeyPress),
    ThemeToggleClicked,
    MenuButtonClicked,
    /// Any link inside the navigation panel was clicked.
    NavLinkClicked,
    /// A same-page anchor was clicked.
    AnchorClicked { href: String },
    BackToTopClicked,
    Intersection { observer: ObserverKind, entries: Vec<Intersection> },
    PointerEnter(ElementKey),
    PointerLeave(ElementKey),
    PointerMove { x: f64, y: f64 },
    /// An uncaught script error reached the window.
    Error { message: String },
}

/// What the host must do after an event was handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub prevent_default: bool,
    pub unobserve: Vec<ElementKey>,
}

impl Outcome {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prevent_default(prevent: bool) -> Self {
        Self { prevent_default: prevent, unobserve: Vec::new() }
    }

    #[must_use]
    pub fn unobserve(keys: Vec<ElementKey>) -> Self {
        Self { prevent_default: false, unobserve: keys }
    }
}
