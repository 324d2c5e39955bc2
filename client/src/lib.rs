//! # client
//!
//! Leptos + WASM frontend for the product catalog browser.
//!
//! The browser build (`hydrate`) fetches the product listing once, then every
//! change to the filter text, page, or selection recomputes the visible rows
//! through the `catalog` crate. The `ssr` build renders the same tree for the
//! host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
