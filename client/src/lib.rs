//! # client
//!
//! Leptos + WASM frontend for the todo app.
//!
//! This crate contains the root page, the list/tab/form components, the
//! cached todo read-model, and the REST helpers that talk to the server.
//! The `ssr` feature renders on the server; the `hydrate` feature builds the
//! browser bundle that takes over the server-rendered page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
