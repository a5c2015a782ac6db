//! Persistent key/value storage.
//!
//! The browser implementation wraps `window.localStorage`; every call is a
//! silent no-op (or returns `None`) when there is no window, e.g. inside a
//! worker or a host-side unit test.  `MemoryStorage` backs tests and any
//! context where persistence is not wanted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
    fn clear(&self);
}

/// Shared handle passed to stores and the API client.
pub type SharedStorage = Rc<dyn KeyValueStore>;

// ---------------------------------------------------------------------------
// Browser localStorage
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn local_storage() -> Option<web_sys::Storage> {
        None
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                // Quota exceeded or storage disabled (private mode).
                crate::logging::error(&format!("Error saving to localStorage: {:?}", e));
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.clear();
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

// ---------------------------------------------------------------------------
// Typed JSON helpers
// ---------------------------------------------------------------------------

/// Read a JSON value, returning `default` when the key is missing or the
/// stored text does not parse.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    store
        .get_item(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(default)
}

pub fn set_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set_item(key, &raw),
        Err(e) => crate::logging::error(&format!("Error serialising '{}': {}", key, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_basic_ops() {
        let store = MemoryStorage::new();
        store.set_item("token", "abc");
        assert_eq!(store.get_item("token").as_deref(), Some("abc"));
        store.remove_item("token");
        assert_eq!(store.get_item("token"), None);
        store.set_item("a", "1");
        store.set_item("b", "2");
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn json_helpers_fall_back_on_garbage() {
        let store = MemoryStorage::new();
        store.set_item("sidebar_collapsed", "not json");
        assert!(!get_json(&store, "sidebar_collapsed", false));
        set_json(&store, "sidebar_collapsed", &true);
        assert!(get_json(&store, "sidebar_collapsed", false));
        assert_eq!(get_json(&store, "missing", 7u32), 7);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_storage_is_inert_without_a_window() {
        let store = BrowserStorage;
        store.set_item("token", "abc");
        assert_eq!(store.get_item("token"), None);
        store.clear();
    }
}
