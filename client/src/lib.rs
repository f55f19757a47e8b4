//! # client
//!
//! Leptos + WASM front end for a personal blog: post listing and post
//! pages, author bio, share links, newsletter form, comment embedding, and a
//! persistent light/dark theme backed by the `theme` crate.
//!
//! Content (post index, rendered post bodies) comes from the static-site
//! data layer as JSON; this crate does not parse Markdown or route pages
//! itself beyond declaring its routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the pre-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
