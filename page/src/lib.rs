//! Interaction controllers for the portfolio page.
//!
//! This crate holds all page behavior that does not need a browser: theme
//! preference, navigation disclosure and active-link tracking, scroll effects,
//! reveal-on-scroll, hover nudges and the small cosmetic helpers. Controllers
//! read layout through [`surface::Layout`] and write presentation state through
//! [`surface::Surface`]; the `portfolio` host crate implements both over the
//! DOM and forwards browser events as [`event::PageEvent`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | [`app::Page`], the single owner of every controller |
//! | [`event`] | Browser events as plain values, plus [`event::Outcome`] |
//! | [`surface`] | Presentation seams (`Surface`, `Layout`) and element addressing |
//! | [`theme`] | Light/dark preference and its persistence |
//! | [`nav`] | Mobile disclosure, anchor scrolling, active section link |
//! | [`scroll`] | Back-to-top visibility and hero parallax |
//! | [`reveal`] | One-way visibility flags and the page fade-in |
//! | [`hover`] | Hover lift on buttons, links and cards |
//! | [`lazy`] | Deferred image sources |
//! | [`cosmetic`] | Cursor follower, welcome banner, load timer |
//! | [`keys`] | Keyboard shortcuts |
//! | [`timing`] | Debounce and throttle gates |
//! | [`storage`] | Preference store trait and in-memory store |
//! | [`config`] | Tunables and DOM selectors |
//! | [`error`] | [`error::PageError`] |
//! | [`consts`] | Shared constants |

pub mod app;
pub mod config;
pub mod consts;
pub mod cosmetic;
pub mod error;
pub mod event;
pub mod hover;
pub mod keys;
pub mod lazy;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod timing;

#[cfg(test)]
mod testing;
