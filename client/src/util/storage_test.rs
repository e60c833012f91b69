#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn nothing_is_stored_in_native_tests() {
    assert_eq!(load_string("theme"), None);
    assert_eq!(recall_display_name(), None);
}

#[test]
fn remember_display_name_returns_trimmed_name() {
    assert_eq!(remember_display_name("  kai  ").as_deref(), Some("kai"));
    assert_eq!(remember_display_name("   "), None);
}
