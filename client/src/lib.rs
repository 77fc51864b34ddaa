//! # site-client
//!
//! Leptos + WASM application shell for the Open Auburn website.
//!
//! This crate contains the document shell, site chrome components, routed
//! pages, and the light/dark color-scheme state that is resolved from a
//! cookie during server rendering and adopted unchanged on hydration.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
