//! # ticket-client
//!
//! Leptos + WASM frontend for the Coding Conf ticket generator.
//!
//! A registration form validates a name, email, GitHub handle and optional
//! avatar, stores the result as the session's single ticket, and a results
//! page renders it as a conference ticket. Nothing is sent to a server; the
//! `ssr` build only renders the initial HTML.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
