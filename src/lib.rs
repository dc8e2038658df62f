//! # atrium-client
//!
//! Leptos + WASM frontend for the Atrium workplace portal.
//!
//! This crate contains pages, shared view components, application state,
//! and the REST layer for the auth endpoints. Workflow logic lives in
//! plain state types under [`state`] so it unit tests host-side; all
//! browser-only behavior is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point — hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
