//! # client
//!
//! Leptos + WASM front-end for the manual Q&A service: browse brands,
//! categories and models, upload a PDF manual, and ask questions about it.
//!
//! The crate holds pages, components, UI state and the typed REST layer.
//! The `hydrate` feature builds the browser bundle; `ssr` lets the server
//! crate render the same `App`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
