//! # pulse-client
//!
//! Leptos + WASM front end for the national health-fund membership workflow.
//! Applicants submit applications, doctors certify conditions, staff approve
//! or reject, and approved applicants get a digital member card.
//!
//! All persistence and business rules live in the backend REST service; this
//! crate holds pages, components, view state, and the typed HTTP client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("pulse-client hydrating against {}", config::api_base());
    leptos::mount::hydrate_body(app::App);
}
