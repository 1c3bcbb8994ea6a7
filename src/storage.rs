//! Local Persistence
//!
//! Saves the collection to browser localStorage under a primary and a
//! backup key. The backup holds the same snapshot and is only consulted
//! when the primary fails to parse. Double-writing is a redundancy
//! strategy, not a transaction: a crash between the two writes can leave
//! the slots divergent, which is accepted for this data.
//!
//! Storage access goes through the [`KeyValueStore`] capability so tests
//! can substitute an in-memory fake for the browser.

use thiserror::Error;

use crate::models::Wishlists;

pub const STORAGE_KEY: &str = "christmas-wishlists-2024";
pub const BACKUP_KEY: &str = "christmas-wishlists-2024-backup";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Key-value storage capability.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` behind the [`KeyValueStore`] capability.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

/// Load the collection saved by a previous session.
///
/// A missing primary snapshot means a fresh start. An unreadable primary
/// falls back to the backup, and an unreadable backup falls back to the
/// empty collection. Stored data corruption is never fatal.
pub fn load_wishlists(store: &impl KeyValueStore) -> Wishlists {
    let Some(raw) = store.read(STORAGE_KEY) else {
        return Wishlists::new();
    };
    match serde_json::from_str(&raw) {
        Ok(lists) => lists,
        Err(err) => {
            log::warn!("primary snapshot unreadable ({err}), falling back to backup");
            load_backup(store)
        }
    }
}

fn load_backup(store: &impl KeyValueStore) -> Wishlists {
    let Some(raw) = store.read(BACKUP_KEY) else {
        log::warn!("backup snapshot missing, starting with an empty collection");
        return Wishlists::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("backup snapshot unreadable ({err}), starting with an empty collection");
        Wishlists::new()
    })
}

/// Write the collection to both slots. Failures are logged and ignored.
pub fn save_wishlists(store: &impl KeyValueStore, lists: &Wishlists) {
    let snapshot = match serde_json::to_string(lists) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::error!("failed to serialize wishlists: {err}");
            return;
        }
    };
    for key in [STORAGE_KEY, BACKUP_KEY] {
        if let Err(err) = store.write(key, &snapshot) {
            log::error!("failed to write {key}: {err}");
        }
    }
}
