//! Item Storage
//!
//! Persists the item list to browser localStorage as a JSON array of
//! strings. Reads fail soft: a missing or malformed payload comes back
//! as an empty list and never reaches the caller as an error.

use web_sys::Storage;

/// localStorage slot holding the serialized item list
pub const STORAGE_KEY: &str = "items";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Serialize the list for the storage slot
pub fn encode(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a raw storage payload; anything but a JSON array of strings
/// is rejected
pub fn decode(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

/// Load the persisted list, or an empty list when the slot is unset.
/// A malformed payload is discarded and the slot cleared so the next
/// read starts clean.
pub fn load() -> Vec<String> {
    let storage = match local_storage() {
        Some(storage) => storage,
        None => return Vec::new(),
    };

    let raw = match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        _ => return Vec::new(),
    };

    match decode(&raw) {
        Some(items) => items,
        None => {
            web_sys::console::warn_1(&"[STORE] discarding malformed item payload".into());
            let _ = storage.remove_item(STORAGE_KEY);
            Vec::new()
        }
    }
}

/// Overwrite the whole slot with the current list
pub fn save(items: &[String]) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, &encode(items));
    }
}

/// Remove the slot entirely (distinct from saving an empty list)
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
