//! # backoffice
//!
//! Leptos + WASM back-office client for a role-based corporate banking
//! backend. Admins manage users, relationship managers onboard clients and
//! raise credit requests, and analysts approve or reject them.
//!
//! The crate splits into a browser-independent core (token store, session
//! manager, request authorizer, route guards, REST client) and the Leptos
//! pages and components that sit on top of it. The core builds and tests
//! natively; the `csr` feature switches on the browser transport, storage,
//! and mount entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guards;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
