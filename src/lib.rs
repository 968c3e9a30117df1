//! # decora
//!
//! Leptos + WASM client for the Decora decoration-booking platform.
//! Customers browse and book decoration services, pay through a hosted
//! checkout, and track booking progress; decorators and admins get their
//! own dashboards.
//!
//! All business logic, persistence, and authorization live in the backend
//! REST API and the third-party identity provider. This crate is the
//! presentational layer: pages, components, client-side session state,
//! and the HTTP gateway that talks to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the app into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
