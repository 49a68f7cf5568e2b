use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// String key/value persistence seam. Browser local storage is the production
/// backend; everything that persists goes through this trait so tests can
/// swap in [`MemoryStore`].
///
/// Synchronous on purpose: the single writer is the UI main thread and local
/// storage has no suspension point.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory store backed by a shared map. Cloning yields a handle onto the
/// same map, so a store rebuilt over a clone observes earlier writes; that is
/// how round-trip tests simulate a page reload.
#[derive(Clone, Default)]
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

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Epoch-milliseconds clock seam. Injected wherever timestamps feed ids or
/// persisted records so tests control time.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock for native targets. Browser code uses its own `js_sys`-backed
/// implementation instead; `SystemTime` is unavailable under wasm.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Settable clock for tests.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn at(now_ms: u64) -> Self {
        let clock = Self::default();
        clock.now.set(now_ms);
        clock
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Load and deserialize a JSON value from the store. Absent or corrupt data
/// falls back to the default; initialization must never fail on bad persisted
/// state, only report it.
pub fn load_json_or_default<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("discarding corrupt record under '{key}': {err}");
            T::default()
        }
    }
}

/// Serialize a value and write it under `key`.
pub fn store_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").as_deref(), Some("hello"));

        store.remove("greeting");
        assert_eq!(store.get("greeting"), None);
    }

    #[test]
    fn cloned_handles_share_the_backing_map() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("key", "value").unwrap();
        assert_eq!(other.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn corrupt_json_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set("list", "not json at all {{{").unwrap();

        let loaded: Vec<String> = load_json_or_default(&store, "list");
        assert!(loaded.is_empty());
    }

    #[test]
    fn absent_key_falls_back_to_default() {
        let store = MemoryStore::new();
        let loaded: Vec<String> = load_json_or_default(&store, "missing");
        assert!(loaded.is_empty());
    }

    #[test]
    fn store_json_then_load_json_roundtrip() {
        let store = MemoryStore::new();
        let terms = vec!["action".to_owned(), "oda".to_owned()];
        store_json(&store, "terms", &terms).unwrap();

        let loaded: Vec<String> = load_json_or_default(&store, "terms");
        assert_eq!(loaded, terms);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
    }
}
