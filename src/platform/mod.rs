//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging backend
//! - Storage (LocalStorage on web, JSON file on native)

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{DATA_ENV, DEFAULT_STORE_FILE, init_logging, open_store};
#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageStore, init_logging, open_store};
