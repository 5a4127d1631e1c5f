//! Browser Storage Helpers
//!
//! Thin `localStorage` JSON glue. Reads and writes are best-effort: a missing
//! window, denied storage, or an unparsable record all degrade to `None` /
//! a dropped write.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The one key this application owns in `localStorage`
pub const STORAGE_KEY: &str = "quake-ready-state";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let raw = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    let _ = storage.set_item(key, &raw);
}
