//! Durable persistence of the single `ThemePreference` value.
//!
//! ERROR HANDLING
//! ==============
//! `read` never fails: inaccessible or corrupt storage reads as absent and the
//! caller falls back to the default. `write` reports failures so the caller
//! can log them; the in-memory theme stays in effect either way.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::PersistenceError;
use crate::preference::ThemePreference;

/// Storage key for the persisted preference. Reads and writes both use it.
pub const STORAGE_KEY: &str = "blog_theme";

/// String key-value storage scoped to the client (e.g. `localStorage`).
pub trait PreferenceStorage: Send + Sync {
    /// Fetch the raw value for `key`, `Ok(None)` if never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be accessed.
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Overwrite the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unavailable or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be accessed.
    fn remove_item(&self, key: &str) -> Result<(), PersistenceError>;
}

/// Reads and writes the theme preference through a `PreferenceStorage`.
#[derive(Clone, Debug)]
pub struct ThemePreferenceStore<S> {
    storage: S,
}

impl<S: PreferenceStorage> ThemePreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Last written preference, or `None` when absent, unreadable or corrupt.
    pub fn read(&self) -> Option<ThemePreference> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("theme preference read failed: {e}");
                return None;
            }
        };
        match raw.parse() {
            Ok(pref) => Some(pref),
            Err(e) => {
                log::warn!("ignoring stored theme preference: {e}");
                None
            }
        }
    }

    /// Overwrite the stored preference.
    ///
    /// # Errors
    ///
    /// Returns the storage error; callers log it and carry on.
    pub fn write(&self, value: ThemePreference) -> Result<(), PersistenceError> {
        self.storage.set_item(STORAGE_KEY, value.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    disabled: bool,
    quota: Option<usize>,
}

/// In-process storage. Clones share the same backing map, so a fresh
/// `ThemePreferenceStore` over a clone models a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes whose total size (keys + values, in bytes)
    /// would exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        let storage = Self::default();
        storage.lock().quota = Some(bytes);
        storage
    }

    /// Make every subsequent operation fail with `Unavailable`.
    pub fn disable(&self) {
        self.lock().disabled = true;
    }

    pub fn enable(&self) {
        self.lock().disabled = false;
    }

    /// Drop every stored item (a cache clear).
    pub fn clear(&self) {
        self.lock().items.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let inner = self.lock();
        if inner.disabled {
            return Err(PersistenceError::Unavailable);
        }
        Ok(inner.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut inner = self.lock();
        if inner.disabled {
            return Err(PersistenceError::Unavailable);
        }
        if let Some(quota) = inner.quota {
            let others: usize = inner
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(PersistenceError::QuotaExceeded);
            }
        }
        inner.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        let mut inner = self.lock();
        if inner.disabled {
            return Err(PersistenceError::Unavailable);
        }
        inner.items.remove(key);
        Ok(())
    }
}
