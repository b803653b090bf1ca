//! Platform settings storage.
//!
//! This module provides the [`KeyValueStorage`] backends the preference store
//! persists through:
//!
//! - **Web (WASM)**: browser `localStorage`
//! - **Desktop**: one JSON file per key in the platform data directory
//!
//! If the platform store cannot be opened (private browsing, no home
//! directory) the app falls back to [`InMemoryStorage`] and settings last
//! for the session only.

use dioxus::logger::tracing::warn;
pub use signverse_core::preferences::{InMemoryStorage, KeyValueStorage};

#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStorage;

/// Open the storage backend for this platform.
#[cfg(target_arch = "wasm32")]
pub fn platform_storage() -> Box<dyn KeyValueStorage> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("localStorage unavailable, settings will not persist: {}", e);
            Box::new(InMemoryStorage::new())
        }
    }
}

/// Open the storage backend for this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_storage() -> Box<dyn KeyValueStorage> {
    match FileStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("Settings directory unavailable, settings will not persist: {}", e);
            Box::new(InMemoryStorage::new())
        }
    }
}
