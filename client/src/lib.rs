//! # admin-client
//!
//! Leptos + WASM front end for the charity site's admin area.
//!
//! This crate wires the `admin-session` core into the browser: the session
//! lives in `localStorage`, API calls go through `gloo-net`, and guard or
//! interceptor redirects are routed through the Leptos router. Pages cover
//! login and the protected dashboard shell; content CRUD views live elsewhere.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
