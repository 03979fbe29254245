//! # lectern-client
//!
//! Leptos + WASM frontend for the Lectern admin portal. Renders the sign-in
//! flow (schema-validated credentials, CSRF-primed login request, session
//! marker persistence) plus the portal landing page, password-reset request
//! screen, and account-creation dialog.
//!
//! The crate builds in two configurations: `hydrate` for the browser bundle
//! and `ssr` for server-side rendering of the shell. Browser-only concerns
//! (fetch, localStorage, timers) are feature-gated so SSR paths no-op.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("lectern client starting");
    leptos::mount::hydrate_body(crate::app::App);
}
