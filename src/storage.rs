//! Key-value preference store: browser `localStorage` or an in-memory map.

use std::collections::HashMap;

use web_sys::{Storage, window};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// `window.localStorage`. When storage is blocked (private mode, sandboxed
/// iframe) reads return `None` and writes are dropped.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = match window().map(|w| w.local_storage()) {
            Some(Ok(Some(s))) => Some(s),
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            _ => {
                log::warn!("localStorage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("failed to read '{key}': {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("failed to write '{key}': {err:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::with_entry("k", "a");
        assert_eq!(store.get("k").as_deref(), Some("a"));
        store.set("k", "b");
        assert_eq!(store.get("k").as_deref(), Some("b"));
        assert_eq!(store.get("missing"), None);
    }
}
