//! Persisted user settings.
//!
//! [`PreferenceStore`] owns the current [`UserSettings`] and writes them to a
//! [`KeyValueStorage`] on every change. Platform backends live in the app
//! crate (`localStorage` on web, a JSON file on desktop); this module ships
//! [`InMemoryStorage`] for tests and headless use.
//!
//! Persistence never fails a mutation. A failed write is logged and the
//! in-memory settings still change.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::SETTINGS_STORAGE_KEY;
use crate::error::StorageError;
use crate::model::{SettingsPatch, UserSettings};

/// Synchronous string key/value store, modelled on browser `localStorage`.
pub trait KeyValueStorage {
    /// Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Returns `Ok(())` even if the key was absent.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Current settings plus the store they persist to.
pub struct PreferenceStore {
    settings: UserSettings,
    storage: Box<dyn KeyValueStorage>,
}

impl PreferenceStore {
    /// Load settings from `storage`, falling back to defaults.
    ///
    /// A record that fails to parse is removed so the next write starts clean.
    pub fn restore(storage: Box<dyn KeyValueStorage>) -> Self {
        let settings = match storage.get(SETTINGS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserSettings>(&raw) {
                Ok(settings) => {
                    debug!("Restored settings for role '{}'", settings.role);
                    settings
                }
                Err(e) => {
                    warn!("Discarding corrupt settings record: {}", e);
                    if let Err(e) = storage.remove(SETTINGS_STORAGE_KEY) {
                        warn!("Failed to remove corrupt settings record: {}", e);
                    }
                    UserSettings::default()
                }
            },
            Ok(None) => UserSettings::default(),
            Err(e) => {
                warn!("Settings storage unreadable, using defaults: {}", e);
                UserSettings::default()
            }
        };

        Self { settings, storage }
    }

    /// Defaults over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::restore(Box::new(InMemoryStorage::new()))
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Merge `patch` into the current settings and persist.
    pub fn update(&mut self, patch: SettingsPatch) {
        self.settings.merge(patch);
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.settings)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set(SETTINGS_STORAGE_KEY, &json));

        if let Err(e) = result {
            warn!("Failed to persist settings: {}", e);
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
