//! Persistence
//!
//! The collection is kept as one JSON blob under a fixed key. `LocalStorage`
//! is the browser backend; `MemoryStore` backs the tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::Item;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Read(js_message(e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(e)))
    }
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend whose reads and writes always fail
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Read("access denied".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}

/// Read the collection, falling back to empty on any failure
///
/// Items with a blank title or repeating an earlier id are dropped.
pub fn load(store: &impl KeyValueStore, key: &str) -> Vec<Item> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("[STORAGE] Could not read '{}': {}", key, e);
            return Vec::new();
        }
    };

    let items: Vec<Item> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("[STORAGE] Discarding unparseable '{}': {}", key, e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| !item.title.trim().is_empty() && seen.insert(item.id.clone()))
        .collect()
}

/// Write the collection through to storage
pub fn persist(store: &impl KeyValueStore, key: &str, items: &[Item]) -> StorageResult<()> {
    let json = serde_json::to_string(items)?;
    store.set(key, &json)
}
