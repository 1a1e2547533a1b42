//! # client
//!
//! Leptos + WASM frontend for the Hirewise voice interview assessment.
//!
//! This crate contains the assessment page, its layout and components, the
//! UI state models, and the browser media glue. It integrates with the `orb`
//! crate for the canvas-drawn circle animation via the `CircleAnimation`
//! bridge component.
//!
//! Built twice: with `ssr` it is linked into the server for rendering; with
//! `hydrate` it is the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and logger, then hydrates.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
