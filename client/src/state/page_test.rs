use super::*;

#[test]
fn success_text_prefers_server_message() {
    assert_eq!(success_text(Some("Rated!".to_owned()), QUALITY_SUBMITTED), "Rated!");
}

#[test]
fn success_text_falls_back_on_missing_or_blank_message() {
    assert_eq!(success_text(None, COMMENT_POSTED), COMMENT_POSTED);
    assert_eq!(success_text(Some("  ".to_owned()), COMMENT_POSTED), COMMENT_POSTED);
}

#[test]
fn notify_failure_sets_error_notice() {
    Owner::new().with(|| {
        let store = RwSignal::new(PageStore::default());
        let err = RequestError::Rejected { status: 404, detail: Some("Comment not found".to_owned()) };
        notify_failure(store, "Delete", &err);
        let notice = store.get_untracked().notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Delete failed: Comment not found");
    });
}

#[test]
fn dispatch_applies_action() {
    Owner::new().with(|| {
        let store = RwSignal::new(PageStore::default());
        dispatch(store, Action::SelectViewShip(4));
        assert_eq!(store.get_untracked().view_context.ship, 4);
    });
}
