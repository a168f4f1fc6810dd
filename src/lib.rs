//! # contact-form
//!
//! Leptos + WASM client for a standalone contact form: four fields with
//! per-keystroke validation and a confirmation display shown after a
//! passing submit.
//!
//! The form model (`state`) is plain Rust so its behavior is tested
//! without a DOM; the components render as a pure function of it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// Browser entry point. Mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
