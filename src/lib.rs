//! # project-board
//!
//! Leptos + WASM project tracking board. Projects are created through a
//! validated form and shown in three status lists (active, in progress,
//! finished); dragging a card onto another list changes its status.
//!
//! All project state lives in the page, in a single [`state::store::ProjectStore`]
//! that notifies each list on every change. The `ssr` feature adds the axum
//! host in [`server`], which only renders the shell and serves assets.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// WASM entry point: set up browser logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
