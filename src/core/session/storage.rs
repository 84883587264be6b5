//! Key-value persistence behind the session manager.
//!
//! Browser builds write through window.localStorage; the in-memory backend
//! backs native tests and server-rendered code paths, where no window
//! exists.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// localStorage key holding the serialized session.
pub const SESSION_KEY: &str = "clipbridge_session";
/// localStorage key holding the bookmarked listing ids.
pub const BOOKMARKS_KEY: &str = "clipbridge_bookmarks";

/// Shared in-memory string store. Clones see the same entries, so a
/// manager rebuilt over a clone observes earlier writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }
}

/// Where session and bookmark values live.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// window.localStorage; reads return None outside the browser
    Browser,
    /// Process-local map for tests and server code
    Memory(MemoryStore),
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Browser
    }
}

impl StorageBackend {
    pub fn memory() -> Self {
        StorageBackend::Memory(MemoryStore::new())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            StorageBackend::Browser => browser_get(key),
            StorageBackend::Memory(store) => store.get(key),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match self {
            StorageBackend::Browser => browser_set(key, value),
            StorageBackend::Memory(store) => store.set(key, value),
        }
    }

    pub fn remove(&self, key: &str) {
        match self {
            StorageBackend::Browser => browser_remove(key),
            StorageBackend::Memory(store) => store.remove(key),
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn browser_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(feature = "ssr")]
fn browser_get(key: &str) -> Option<String> {
    let _ = key;
    None
}

#[cfg(not(feature = "ssr"))]
fn browser_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(feature = "ssr")]
fn browser_set(key: &str, value: &str) {
    let _ = (key, value);
}

#[cfg(not(feature = "ssr"))]
fn browser_remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(feature = "ssr")]
fn browser_remove(key: &str) {
    let _ = key;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let backend = StorageBackend::memory();
        assert_eq!(backend.get(SESSION_KEY), None);

        backend.set(SESSION_KEY, "{\"hello\":true}");
        assert_eq!(backend.get(SESSION_KEY), Some("{\"hello\":true}".to_string()));

        backend.remove(SESSION_KEY);
        assert_eq!(backend.get(SESSION_KEY), None);
    }

    #[test]
    fn test_memory_clones_share_entries() {
        let store = MemoryStore::new();
        let first = StorageBackend::Memory(store.clone());
        let second = StorageBackend::Memory(store);

        first.set(BOOKMARKS_KEY, "[\"l-1\"]");
        assert_eq!(second.get(BOOKMARKS_KEY), Some("[\"l-1\"]".to_string()));
    }

    #[test]
    fn test_remove_absent_key_is_a_no_op() {
        let backend = StorageBackend::memory();
        backend.remove("never_written");
        assert_eq!(backend.get("never_written"), None);
    }

    #[test]
    fn test_keys_are_distinct() {
        let backend = StorageBackend::memory();
        backend.set(SESSION_KEY, "session");
        backend.set(BOOKMARKS_KEY, "bookmarks");
        assert_eq!(backend.get(SESSION_KEY), Some("session".to_string()));
        assert_eq!(backend.get(BOOKMARKS_KEY), Some("bookmarks".to_string()));
    }
}
