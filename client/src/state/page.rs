//! Game page store signal and request plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game page provides `RwSignal<PageStore>` and `GameRef` via context.
//! Components call an `net::api` helper inside [`spawn_request`] and report
//! the outcome through [`dispatch`], [`notify_success`] or
//! [`notify_failure`]; the toast reads the resulting notice.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::future::Future;

use leptos::prelude::*;
use ratings::error::{RequestError, failure_notice};
use ratings::store::{Action, NoticeKind, PageStore};

pub const QUALITY_SUBMITTED: &str = "Quality rating saved.";
pub const QUALITY_RETRACTED: &str = "Your quality rating was retracted.";
pub const DIFFICULTY_SUBMITTED: &str = "Difficulty rating saved.";
pub const DIFFICULTY_RETRACTED: &str = "Your difficulty rating for this context was retracted.";
pub const COMMENT_POSTED: &str = "Comment posted!";
pub const COMMENT_UPDATED: &str = "Comment updated!";
pub const COMMENT_DELETED: &str = "Comment deleted.";
pub const DELETE_CANCELLED: &str = "Deletion cancelled.";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Apply one action to the store.
pub fn dispatch(store: RwSignal<PageStore>, action: Action) {
    store.update(|s| s.apply(action));
}

/// The server's message when it sent one, else `fallback`.
#[must_use]
pub fn success_text(server: Option<String>, fallback: &str) -> String {
    server.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned())
}

pub fn notify_success(store: RwSignal<PageStore>, text: impl Into<String>) {
    dispatch(store, Action::Notify { kind: NoticeKind::Success, text: text.into() });
}

/// Log the failure and show `"<action> failed: <message>"`.
pub fn notify_failure(store: RwSignal<PageStore>, action: &str, err: &RequestError) {
    #[cfg(feature = "csr")]
    log::warn!("{action} failed: {err}");
    dispatch(store, Action::Notify { kind: NoticeKind::Error, text: failure_notice(action, err, UNKNOWN_ERROR) });
}

/// Run a request future on the browser event loop. Native builds drop it.
pub fn spawn_request<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(fut);
    }
}
