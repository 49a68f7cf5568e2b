//! Browser-backed implementations of the core persistence seams:
//! `localStorage` as the [`KeyValueStore`] and `js_sys::Date` as the
//! [`Clock`] (`SystemTime` is unavailable under wasm).

use anyhow::{Result, anyhow};
use mv_storage::{Clock, KeyValueStore};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// `localStorage` adapter. Reads degrade to `None` and removals are silent
/// when storage is unavailable (private browsing); failed writes surface as
/// errors so callers can log them.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage().ok_or_else(|| anyhow!("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| anyhow!("localStorage write failed for '{key}': {err:?}"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
