//! # crm-cards
//!
//! Leptos components for the customer views of a CRM web application: the
//! customer record card with its status/note workflow, the edit-details
//! dialog, and the shared page header.
//!
//! Interaction logic lives in plain state structs under `state` so it can be
//! exercised without a browser; `components` are reactive shells over them.
//! Mutations are never performed here: callers inject the update operations
//! as callbacks.

pub mod components;
pub mod error;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;

pub use error::Error;

/// Route panics and `log` records to the browser console.
///
/// Call once from the WASM entry point before mounting.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
}
