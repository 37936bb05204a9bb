//! # plaza-client
//!
//! Leptos + WASM frontend for the Plaza community board: a post feed with
//! categories, likes/bookmarks, comments, an admin category workflow, and
//! direct-message chat over a STOMP WebSocket broker with a polling
//! fallback.
//!
//! This crate contains pages, components, application state, the REST API
//! wrappers, and the chat transport. All persistence and authorization live
//! in the external backend; the client reflects server state locally and
//! patches its own state after successful calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
