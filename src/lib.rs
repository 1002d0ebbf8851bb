//! # convchat
//!
//! Leptos + WASM single-page chat client for a hosted reactive database.
//! Users sign up or sign in, then share one live group conversation with a
//! full-text search over its history.
//!
//! This crate contains pages, components, application state, the service
//! clients for the data platform and its auth endpoints, and small browser
//! utilities. Everything that touches the DOM or the network is gated behind
//! the `csr` feature so state and formatting logic stay testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
