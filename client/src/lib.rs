//! # genocrowd-client
//!
//! Leptos + WASM frontend for the Genocrowd annotation tool.
//!
//! This crate contains the route-level pages (about, dashboard, annotator
//! workspace), the shared session store, the session-check bootstrap and the
//! HTTP helpers that talk to the annotation backend.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
