//! Hello World - a two-page demo site
//!
//! A small Leptos application with a shared navigation layout, animated page
//! transitions and a time-of-day greeting, rendered on the server with axum and
//! hydrated in the browser with WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
