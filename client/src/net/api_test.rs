use super::*;

#[test]
fn rating_endpoints_format_expected_paths() {
    assert_eq!(quality_endpoint(12), "/game/12/rate_quality");
    assert_eq!(difficulty_endpoint(12), "/game/12/rate_difficulty");
    assert_eq!(
        difficulty_retract_endpoint(12, ContextKey::new(3, 0)),
        "/game/12/rate_difficulty?difficulty_level_id=3&ship_type_id=0"
    );
    assert_eq!(my_ratings_endpoint(12), "/api/v1/games/12/my-ratings");
}

#[test]
fn comment_endpoints_format_expected_paths() {
    assert_eq!(comments_endpoint(5), "/api/v1/games/5/comments");
    assert_eq!(comment_endpoint(77), "/api/v1/comments/77");
}

#[test]
fn admin_game_endpoint_formats_expected_path() {
    assert_eq!(admin_game_endpoint(9), "/admin/game/9");
}

#[test]
fn comment_fields_include_name_only_when_given() {
    assert_eq!(comment_fields("gg", None), vec![("content".to_owned(), "gg".to_owned())]);
    assert_eq!(comment_fields("gg", Some("kai")).len(), 2);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_stubs_fail_with_transport_error() {
    let err = block_on(delete_comment(1)).unwrap_err();
    assert!(matches!(err, RequestError::Transport(_)));
}

#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
