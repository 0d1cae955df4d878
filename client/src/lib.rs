//! # client
//!
//! Leptos + WASM front end for the chess application.
//!
//! This crate contains pages, components, application state and the browser
//! adapters (storage, HTTP, router) that plug into the `session` gate. The
//! `server` crate renders it with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the console logger and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
