//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only two values survive a reload: the theme (see `util::theme`) and the
//! display name last typed into a name field, which is prefilled on the
//! next visit.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use ratings::form::{USERNAME_STORAGE_KEY, normalize_display_name};

/// Load a string from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a string to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// The remembered display name, if any.
pub fn recall_display_name() -> Option<String> {
    load_string(USERNAME_STORAGE_KEY).and_then(|raw| normalize_display_name(&raw))
}

/// Remember `raw` as the display name. Blank input is not stored.
/// Returns the normalized name.
pub fn remember_display_name(raw: &str) -> Option<String> {
    let name = normalize_display_name(raw)?;
    save_string(USERNAME_STORAGE_KEY, &name);
    Some(name)
}
