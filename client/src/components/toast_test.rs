use super::*;

fn notice(kind: NoticeKind) -> Notice {
    Notice { seq: 1, kind, text: "x".to_owned() }
}

#[test]
fn toast_hidden_without_notice() {
    assert_eq!(toast_class(None), "toast");
}

#[test]
fn error_notice_gets_error_modifier() {
    assert_eq!(toast_class(Some(&notice(NoticeKind::Success))), "toast show");
    assert_eq!(toast_class(Some(&notice(NoticeKind::Error))), "toast show toast--error");
}
