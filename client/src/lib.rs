//! # client
//!
//! Leptos + WASM single-page front end for the video-to-audio service.
//!
//! Pages, components and the browser `fetch` transport live here; request
//! handling, state transitions and guard decisions come from `session`, so
//! everything this crate does in the browser is a thin binding of those
//! operations to signals and DOM events.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
