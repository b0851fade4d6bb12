//! # client
//!
//! Leptos + WASM frontend for MonsoonRecipes.
//!
//! The interesting state lives in the `shell` crate: the navigation
//! coordinator, breakpoint monitor, outside-interaction detector and carousel
//! engine are plain Rust. This crate renders them, feeds them browser events
//! and applies the actions they return (route changes, scroll lock, frame
//! scheduling). Pages are mostly static fixtures; nothing talks to a server.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
