//! Client-local key/value persistence.
//!
//! Values are strings under fixed keys; structured values go through the
//! JSON helpers. Every operation is best-effort: failures are logged and
//! otherwise ignored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// String key/value persistence used by the role store and task store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` on the web build; a no-op everywhere else
/// (server rendering, desktop, mobile).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    #[cfg(feature = "web")]
    fn get(&self, key: &str) -> Option<String> {
        match Self::local_storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = ?e, "localStorage read failed");
                None
            }
        }
    }

    #[cfg(feature = "web")]
    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::local_storage() else {
            tracing::warn!(key, "localStorage unavailable, value not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, error = ?e, "localStorage write failed");
        }
    }

    #[cfg(feature = "web")]
    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, error = ?e, "localStorage remove failed");
            }
        }
    }

    #[cfg(not(feature = "web"))]
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(not(feature = "web"))]
    fn set(&self, _key: &str, _value: &str) {}

    #[cfg(not(feature = "web"))]
    fn remove(&self, _key: &str) {}
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read and decode a JSON value. Missing keys and undecodable values both
/// come back as `None`; the latter is logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => tracing::warn!(key, error = %e, "failed to encode value for storage"),
    }
}
