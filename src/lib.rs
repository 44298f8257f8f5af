//! # folio
//!
//! Leptos + WASM enhancement layer for a static portfolio page.
//!
//! The page ships plain HTML; this crate adds theme persistence, smooth
//! in-page scrolling, a project list rendered from JSON, a reusable project
//! modal, contact-form validation, and reveal-on-scroll animations. Every
//! browser binding sits behind the `csr` feature so the decision logic
//! (escaping, parsing, markup, state transitions, validation) builds and
//! tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point, run once the module is instantiated by the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::boot();
}
