//! # portfolio
//!
//! WASM host for the portfolio page's interactivity.
//!
//! The `page` crate owns every controller and all page state; this crate is
//! the browser side of the seam. It implements `page::surface::{Surface,
//! Layout}` over the DOM, backs `page::storage::PreferenceStore` with
//! `localStorage`, and translates DOM events into `page::event::PageEvent`s.
//!
//! Browser code is compiled only with the `hydrate` feature. Without it the
//! storage and config helpers fall back to no-ops so the crate builds and
//! tests natively.

pub mod registry;
pub mod settings;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod timing;

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    boot::start();
}
