//! Page-level controller ownership and event routing.
//!
//! [`Page`] is constructed once at startup and owns every controller as a
//! field. Controllers never reach each other; the only shared state is the
//! page itself, reached through the host.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::fmt;

use crate::config::PageConfig;
use crate::cosmetic::{CursorFollower, LoadTimer, WelcomeBanner};
use crate::error::PageError;
use crate::event::{ObserverKind, Outcome, PageEvent};
use crate::hover::HoverNudge;
use crate::keys::Shortcut;
use crate::lazy::LazyImages;
use crate::nav::NavController;
use crate::reveal::{ObserverSpec, RevealController};
use crate::scroll::ScrollEffects;
use crate::storage::PreferenceStore;
use crate::surface::{Layout, Surface};
use crate::theme::{Theme, ThemeController};

pub struct Page {
    config: PageConfig,
    pub theme: ThemeController,
    pub nav: NavController,
    pub scroll: ScrollEffects,
    pub reveal: RevealController,
    pub hover: HoverNudge,
    pub lazy: LazyImages,
    pub cursor: CursorFollower,
    pub load_timer: LoadTimer,
}

impl Page {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        let spec = ObserverSpec { threshold: config.reveal.threshold, root_margin: config.reveal.root_margin.clone() };
        Self {
            theme: ThemeController::new(config.storage_key.clone()),
            nav: NavController::new(config.nav.look_ahead_px),
            scroll: ScrollEffects::new(config.scroll.back_to_top_threshold_px, config.scroll.parallax_factor),
            reveal: RevealController::new(spec, config.reveal.fade_ms),
            hover: HoverNudge::new(config.reveal.hover_lift_px),
            lazy: LazyImages::new(),
            cursor: CursorFollower::new(config.cosmetic.cursor_follower),
            load_timer: LoadTimer::new(config.cosmetic.slow_load_ms),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Apply the stored theme. Called once before any listener is bound.
    pub fn initialize<H, S>(&mut self, host: &mut H, store: &S) -> Theme
    where
        H: Surface + Layout,
        S: PreferenceStore,
    {
        self.theme.initialize(store, host)
    }

    #[must_use]
    pub fn banner(&self) -> String {
        WelcomeBanner::new(&self.config.banner).render()
    }

    /// Route one browser event to the controllers that care about it.
    pub fn handle<H, S>(&mut self, event: &PageEvent, host: &mut H, store: &mut S) -> Outcome
    where
        H: Surface + Layout,
        S: PreferenceStore,
    {
        match event {
            PageEvent::Ready => {
                self.reveal.on_ready(host);
                Outcome::none()
            }
            PageEvent::Load { elapsed_ms } => {
                self.reveal.on_load(host);
                if let Some(warning) = self.load_timer.check(*elapsed_ms) {
                    log::warn!("{warning}");
                }
                Outcome::none()
            }
            PageEvent::Scroll => {
                let scroll_y = host.scroll_y();
                let viewport_height = host.viewport_height();
                let sections = host.sections();
                self.nav.update_active_link(scroll_y, &sections, host);
                self.scroll.on_scroll(scroll_y, viewport_height, host);
                Outcome::none()
            }
            PageEvent::Resize => {
                log::debug!("window resized, adjusting layout");
                Outcome::none()
            }
            PageEvent::Key(press) => match Shortcut::resolve(press) {
                Some(Shortcut::CloseMenu) => {
                    if self.nav.is_open() {
                        self.nav.close_disclosure(host);
                    }
                    Outcome::none()
                }
                Some(shortcut @ Shortcut::ToggleTheme) => {
                    self.theme.toggle(store, host);
                    Outcome::prevent_default(shortcut.prevents_default())
                }
                None => Outcome::none(),
            },
            PageEvent::ThemeToggleClicked => {
                self.theme.toggle(store, host);
                Outcome::none()
            }
            PageEvent::MenuButtonClicked => {
                self.nav.toggle_disclosure(host);
                Outcome::none()
            }
            PageEvent::NavLinkClicked => {
                self.nav.close_disclosure(host);
                Outcome::none()
            }
            PageEvent::AnchorClicked { href } => Outcome::prevent_default(self.nav.handle_anchor_click(href, host)),
            PageEvent::BackToTopClicked => {
                self.scroll.back_to_top_clicked(host);
                Outcome::none()
            }
            PageEvent::Intersection { observer, entries } => match observer {
                ObserverKind::Reveal => Outcome::unobserve(self.reveal.on_intersection(entries, host)),
                ObserverKind::LazyImages => Outcome::unobserve(self.lazy.on_intersection(entries, host)),
            },
            PageEvent::PointerEnter(key) => {
                self.hover.on_enter(*key, host);
                Outcome::none()
            }
            PageEvent::PointerLeave(key) => {
                self.hover.on_leave(*key, host);
                Outcome::none()
            }
            PageEvent::PointerMove { x, y } => {
                self.cursor.on_pointer_move(*x, *y, host);
                Outcome::none()
            }
            PageEvent::Error { message } => {
                log::error!("an error occurred: {message}");
                Outcome::none()
            }
        }
    }
}

/// Independently bound pieces of page behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Theme,
    Navigation,
    Anchors,
    Scroll,
    Reveal,
    Hover,
    LazyImages,
    Cursor,
    Keyboard,
    Resize,
    Lifecycle,
    ErrorLog,
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Theme => "theme",
            Self::Navigation => "navigation",
            Self::Anchors => "anchors",
            Self::Scroll => "scroll",
            Self::Reveal => "reveal",
            Self::Hover => "hover",
            Self::LazyImages => "lazy-images",
            Self::Cursor => "cursor",
            Self::Keyboard => "keyboard",
            Self::Resize => "resize",
            Self::Lifecycle => "lifecycle",
            Self::ErrorLog => "error-log",
        };
        f.write_str(name)
    }
}

/// Keep whichever of `found` exist. Fails naming `wanted` only when none do.
///
/// # Errors
///
/// [`PageError::MissingElement`] when every candidate is absent.
pub fn any_present<T>(found: impl IntoIterator<Item = Option<T>>, wanted: &str) -> Result<Vec<T>, PageError> {
    let present = found.into_iter().flatten().collect::<Vec<_>>();
    if present.is_empty() {
        return Err(PageError::missing(wanted));
    }
    Ok(present)
}

/// Result of binding every controller, one failure boundary per controller.
#[derive(Debug, Default)]
pub struct BootReport {
    pub started: Vec<Controller>,
    pub failed: Vec<(Controller, PageError)>,
}

impl BootReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one controller's binding step. A failure is recorded and logged but
    /// never stops later steps.
    pub fn run(&mut self, controller: Controller, step: impl FnOnce() -> Result<(), PageError>) {
        match step() {
            Ok(()) => self.started.push(controller),
            Err(e) => {
                log::warn!("{controller} controller disabled: {e}");
                self.failed.push((controller, e));
            }
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
