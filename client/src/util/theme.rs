//! Theme initialization and toggle.
//!
//! Reads the stored preference (falling back to the system color scheme),
//! applies it as the `data-theme` attribute of `<html>`, and writes changes
//! back to `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage or DOM failures are ignored and the
//! page simply keeps its current theme. Native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use ratings::theme::Theme;
#[cfg(feature = "csr")]
use ratings::theme::STORAGE_KEY;

/// Theme for this page load.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };
        let saved = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Theme::initial(saved.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
