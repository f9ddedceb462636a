//! Browser `localStorage` helpers for JSON records.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session record is persisted. These helpers keep the hydrate-only
//! web-sys glue in one place; on the server they are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read and decode the record under `key`. Unreadable records count as absent.
pub fn read_record<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw)
            .map_err(|e| log::warn!("discarding unreadable {key} record: {e}"))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` and store it under `key`.
pub fn write_record<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(value)) else {
            log::warn!("could not persist {key} record");
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key} record");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn clear_record(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
