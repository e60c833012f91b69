//! Transient notice shown after requests finish.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use ratings::store::{Action, Notice, NoticeKind, PageStore};

use crate::state::page::{dispatch, spawn_request};

#[cfg(feature = "csr")]
const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

fn toast_class(notice: Option<&Notice>) -> &'static str {
    match notice.map(|n| n.kind) {
        None => "toast",
        Some(NoticeKind::Success) => "toast show",
        Some(NoticeKind::Error) => "toast show toast--error",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();

    // Each notice hides itself after a while unless a newer one replaced it.
    Effect::new(move || {
        let Some(seq) = store.with(|s| s.notice.as_ref().map(|n| n.seq)) else {
            return;
        };
        spawn_request(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(NOTICE_DURATION).await;
            dispatch(store, Action::Dismiss(seq));
        });
    });

    view! {
        <div
            id="toast-notification"
            role="status"
            aria-live="polite"
            class=move || store.with(|s| toast_class(s.notice.as_ref()))
        >
            {move || store.with(|s| s.notice.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}
