use super::*;
use ratings::config::SiteConfig;
use ratings::evaluation::{Comment, EvaluationData, SessionData, UserRatings};
use ratings::store::NoticeKind;

fn comment(id: i64, content: &str) -> Comment {
    Comment { id, content: content.to_owned(), user_name: "kai".to_owned(), user_id: Some(1) }
}

fn store_with_comments(ids: &[i64]) -> RwSignal<PageStore> {
    let evaluation = EvaluationData {
        comments: ids.iter().map(|id| comment(*id, &format!("comment {id}"))).collect(),
        ..EvaluationData::default()
    };
    RwSignal::new(PageStore::new(SiteConfig::default(), SessionData::default(), evaluation, UserRatings::default()))
}

fn comment_ids(store: RwSignal<PageStore>) -> Vec<i64> {
    store.with_untracked(|s| s.evaluation.comments.iter().map(|c| c.id).collect())
}

// =============================================================
// Comment deletion
// =============================================================

#[test]
fn deleted_comment_is_removed_alone() {
    Owner::new().with(|| {
        let store = store_with_comments(&[1, 2, 3]);
        let leave = settle(store, Outcome::CommentDeleted { id: 2, result: Ok(()) });
        assert!(!leave);
        assert_eq!(comment_ids(store), [1, 3]);
        let notice = store.get_untracked().notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, COMMENT_DELETED);
    });
}

#[test]
fn failed_comment_deletion_keeps_comments_and_shows_detail() {
    Owner::new().with(|| {
        let store = store_with_comments(&[1, 2, 3]);
        let err = RequestError::Rejected { status: 403, detail: Some("Not your comment".to_owned()) };
        settle(store, Outcome::CommentDeleted { id: 2, result: Err(err) });
        assert_eq!(comment_ids(store), [1, 2, 3]);
        let notice = store.get_untracked().notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Delete failed: Not your comment");
    });
}

// =============================================================
// Retractions and game deletion
// =============================================================

#[test]
fn quality_retraction_uses_server_message() {
    Owner::new().with(|| {
        let store = store_with_comments(&[]);
        let resp: QualityRatingResponse = serde_json::from_str(r#"{"status": "success", "message": "Gone."}"#).unwrap();
        assert!(!settle(store, Outcome::QualityRetracted(Ok(resp))));
        assert_eq!(store.get_untracked().notice.unwrap().text, "Gone.");
    });
}

#[test]
fn failed_retraction_reports_as_retract() {
    Owner::new().with(|| {
        let store = store_with_comments(&[]);
        let err = RequestError::Rejected { status: 500, detail: None };
        settle(store, Outcome::DifficultyRetracted(Err(err)));
        let text = store.get_untracked().notice.unwrap().text;
        assert_eq!(text, format!("Retract failed: {}", crate::state::page::UNKNOWN_ERROR));
    });
}

#[test]
fn game_deletion_leaves_only_on_success() {
    Owner::new().with(|| {
        let store = store_with_comments(&[]);
        assert!(settle(store, Outcome::GameDeleted(Ok(MessageResponse::default()))));
        assert_eq!(store.get_untracked().notice.unwrap().text, GAME_DELETED);

        let err = RequestError::Transport("offline".to_owned());
        assert!(!settle(store, Outcome::GameDeleted(Err(err))));
        assert_eq!(store.get_untracked().notice.unwrap().kind, NoticeKind::Error);
    });
}

#[test]
fn ratings_fetch_only_when_logged_in_without_blob() {
    assert!(needs_ratings_fetch(true, false));
    assert!(!needs_ratings_fetch(true, true));
    assert!(!needs_ratings_fetch(false, false));
}
