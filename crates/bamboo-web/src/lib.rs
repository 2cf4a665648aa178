//! Bamboo storefront front-end: shared navigation bar and the style guide
//! code page, rendered with Leptos.
//!
//! - `ssr` feature: server-side rendering (the `bamboo-web` binary)
//! - `hydrate` feature: client-side hydration (WASM)

#![recursion_limit = "256"]

pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod copy_state;
pub mod pages;
pub mod snippets;

/// Take over the server-rendered HTML in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
