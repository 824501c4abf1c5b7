//! # storefront
//!
//! Leptos + WASM storefront client: a product listing fetched from a remote
//! catalog API, client-side category filtering, product cards with variant
//! selection, and a shared cart store.
//!
//! This crate contains pages, components, application state, the catalog
//! HTTP client, and price formatting helpers.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
