//! # finboard-client
//!
//! Leptos + WASM front-end for the Finboard personal-finance dashboard.
//!
//! Besides pages and presentational components, this crate holds the two
//! pieces of shared behavior the UI depends on:
//!
//! - route guards (`components::route_guard`, `state::access`) that gate
//!   protected views on the locally persisted session, and
//! - the process-wide error channel (`net::error_channel`) that lets any
//!   network call site surface a user-facing notification through the single
//!   mounted `NotificationBanner`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
