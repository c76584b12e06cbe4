//! Mobile navigation disclosure, same-page anchor scrolling and the
//! active-section link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{MENU_ICON_CLOSED, MENU_ICON_OPEN};
use crate::surface::{Layout, Section, Surface};

/// Where a clicked `href` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// A bare `#`: intercepted, but there is nothing to scroll to.
    Empty,
    /// `#id` on this page.
    Id(&'a str),
}

impl<'a> AnchorTarget<'a> {
    /// Classify an `href`. Returns `None` for anything that is not a
    /// same-page fragment, which the browser should handle itself.
    #[must_use]
    pub fn parse(href: &'a str) -> Option<Self> {
        let id = href.trim().strip_prefix('#')?;
        if id.is_empty() { Some(Self::Empty) } else { Some(Self::Id(id)) }
    }
}

/// Last section, in document order, whose top minus `look_ahead` is at or
/// above `scroll_y`.
#[must_use]
pub fn current_section(scroll_y: f64, sections: &[Section], look_ahead: f64) -> Option<&Section> {
    sections.iter().rev().find(|section| scroll_y >= section.top - look_ahead)
}

#[derive(Debug, Clone)]
pub struct NavController {
    look_ahead: f64,
    open: bool,
    active: Option<String>,
}

impl NavController {
    #[must_use]
    pub fn new(look_ahead: f64) -> Self {
        Self { look_ahead, open: false, active: None }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the section whose link is currently marked active.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn toggle_disclosure(&mut self, surface: &mut impl Surface) -> bool {
        self.set_open(!self.open, surface);
        self.open
    }

    pub fn close_disclosure(&mut self, surface: &mut impl Surface) {
        self.set_open(false, surface);
    }

    fn set_open(&mut self, open: bool, surface: &mut impl Surface) {
        self.open = open;
        surface.set_disclosure(open, if open { MENU_ICON_OPEN } else { MENU_ICON_CLOSED });
    }

    /// Handle a click on a link with `href`. Returns `true` when the click was
    /// intercepted and the browser's default jump must be cancelled.
    ///
    /// The scroll target is the element's top minus the fixed header height,
    /// so the section heading is not hidden under the header.
    pub fn handle_anchor_click<H>(&self, href: &str, host: &mut H) -> bool
    where
        H: Surface + Layout,
    {
        let Some(target) = AnchorTarget::parse(href) else {
            return false;
        };
        let AnchorTarget::Id(id) = target else {
            return true;
        };
        match host.element_top(id) {
            Some(top) => {
                let offset = top - host.header_height();
                host.scroll_to(offset);
            }
            None => log::debug!("anchor target #{id} not found"),
        }
        true
    }

    /// Recompute the active link for `scroll_y`. The surface is only written
    /// when the active section changes.
    pub fn update_active_link(&mut self, scroll_y: f64, sections: &[Section], surface: &mut impl Surface) -> Option<&str> {
        let current = current_section(scroll_y, sections, self.look_ahead).map(|section| section.id.as_str());
        if current != self.active.as_deref() {
            surface.set_active_link(current);
            self.active = current.map(str::to_owned);
        }
        self.active.as_deref()
    }
}
