use std::collections::HashMap;

use super::*;

fn reader(blobs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = blobs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |id| map.get(id).cloned()
}

// =============================================================
// Game page
// =============================================================

#[test]
fn game_page_requires_evaluation_data() {
    let err = load_game_page(reader(&[])).unwrap_err();
    assert!(matches!(err, PageDataError::Missing(EVALUATION_DATA)));
}

#[test]
fn game_page_defaults_optional_blobs() {
    let store = load_game_page(reader(&[(EVALUATION_DATA, "{}")])).unwrap();
    assert_eq!(store.session, SessionData::default());
    assert_eq!(store.config, SiteConfig::default());
    assert!(store.user_ratings.difficulty.is_empty());
}

#[test]
fn game_page_reads_session_and_ratings() {
    let store = load_game_page(reader(&[
        (EVALUATION_DATA, r#"{"overall_quality_score": 7.5}"#),
        (SESSION_DATA, r#"{"user_id": 3, "is_admin": true}"#),
        (USER_RATINGS_DATA, r#"{"quality": {"fun": 8}, "difficulty": {}}"#),
    ]))
    .unwrap();
    assert_eq!(store.session.user_id, Some(3));
    assert!(store.has_quality_rating());
    assert_eq!(store.evaluation.overall_quality_score, 7.5);
}

#[test]
fn malformed_session_is_an_error() {
    let err = load_game_page(reader(&[(EVALUATION_DATA, "{}"), (SESSION_DATA, "{nope")])).unwrap_err();
    assert!(matches!(err, PageDataError::Malformed { id: SESSION_DATA, .. }));
}

// =============================================================
// Config
// =============================================================

#[test]
fn invalid_config_falls_back_to_defaults() {
    assert_eq!(load_config(Some(r#"{"difficulty_min": 80, "difficulty_max": 10}"#)), SiteConfig::default());
    assert_eq!(load_config(Some("not json")), SiteConfig::default());
    assert_eq!(load_config(Some("   ")), SiteConfig::default());
}

#[test]
fn valid_config_is_used() {
    let config = load_config(Some(r#"{"difficulty_max": 40}"#));
    assert_eq!(config.difficulty_max, 40);
}

// =============================================================
// Structure and attributes
// =============================================================

#[test]
fn missing_structure_is_empty() {
    assert_eq!(load_structure(reader(&[])).unwrap(), GameStructure::default());
}

#[test]
fn game_ref_parses_attributes() {
    assert_eq!(
        GameRef::from_attributes(Some(" 42 "), Some("Ketsui")),
        Some(GameRef { id: 42, title: "Ketsui".to_owned() })
    );
    assert_eq!(GameRef::from_attributes(Some("x"), None), None);
    assert_eq!(GameRef::from_attributes(None, Some("Ketsui")), None);
}
