//! Browser client for the STG Ratings site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered by the backend. This crate compiles to WASM (feature
//! `csr`) and mounts Leptos components into placeholder elements of those
//! pages: the theme switcher on every page, the rating/comment surface on a
//! game page, and the structure editor on the game add/edit page. Without
//! `csr` the crate builds natively so its pure helpers can be unit-tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    app::mount();
}
