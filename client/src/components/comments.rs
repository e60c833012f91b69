//! Comment form and list with in-place editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Comments come from the page store. Posting prepends the returned comment,
//! editing swaps the row for a textarea until the update succeeds or is
//! cancelled, and deletion goes through the confirmation dialog. Controls
//! are shown per comment according to `CommentActions`.

use leptos::prelude::*;
use ratings::comment::{CommentActions, NO_COMMENTS, normalize_content, profile_href};
use ratings::confirm::ConfirmAction;
use ratings::evaluation::Comment;
use ratings::store::{Action, PageStore};

use crate::components::display_name::{DisplayNameInput, display_name_signal, take_display_name};
use crate::net::api;
use crate::state::page::{
    COMMENT_POSTED, COMMENT_UPDATED, dispatch, notify_failure, notify_success, spawn_request,
};
use crate::state::ui::UiState;
use crate::util::page_data::GameRef;

#[component]
pub fn CommentForm() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let game_id = expect_context::<GameRef>().id;
    let content = RwSignal::new(String::new());
    let name = display_name_signal();
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(text) = normalize_content(&content.get_untracked()) else {
            return;
        };
        let display_name = take_display_name(name).map(|(_, n)| n);
        busy.set(true);
        spawn_request(async move {
            match api::post_comment(game_id, text, display_name).await {
                Ok(comment) => {
                    dispatch(store, Action::CommentAdded(comment));
                    notify_success(store, COMMENT_POSTED);
                    content.set(String::new());
                }
                Err(err) => notify_failure(store, "Comment", &err),
            }
            busy.set(false);
        });
    };

    view! {
        <form id="comment-form" class="comment-form" on:submit=on_submit>
            <textarea
                name="content"
                rows="3"
                required
                placeholder="Share your thoughts"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <DisplayNameInput name=name id="user_name_comment" />
            <button type="submit" disabled=move || busy.get() aria-busy=move || busy.get().to_string()>
                "Post comment"
            </button>
        </form>
    }
}

#[component]
pub fn CommentList() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();

    view! {
        <section id="comments-section" class="comments">
            <Show when=move || store.with(|s| s.evaluation.comments.is_empty())>
                <p id="no-comments-placeholder">{NO_COMMENTS}</p>
            </Show>
            <For
                each=move || store.with(|s| s.evaluation.comments.clone())
                key=|c| (c.id, c.content.clone())
                children=move |comment: Comment| view! { <CommentItem comment=comment /> }
            />
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let id = comment.id;
    let actions = store.with_untracked(|s| CommentActions::for_viewer(&comment, &s.session));
    let is_editing = move || store.with(|s| s.editing.as_ref().is_some_and(|e| e.comment_id == id));

    let author = match profile_href(&comment) {
        Some(href) => view! { <a href=href>{comment.user_name.clone()}</a> }.into_any(),
        None => view! { <span>{comment.user_name.clone()}</span> }.into_any(),
    };
    let content = comment.content.clone();

    let on_edit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dispatch(store, Action::BeginEdit(id));
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| {
            u.confirm(ConfirmAction::DeleteComment(id));
        });
    };

    view! {
        <blockquote data-comment-id=id>
            <Show
                when=is_editing
                fallback=move || {
                    view! {
                        <p>{content.clone()}</p>
                    }
                }
            >
                <EditCommentForm id=id />
            </Show>
            <footer>
                <cite>"- " {author}</cite>
                <Show when=move || actions.can_edit || actions.can_delete>
                    <span class="comment-actions">
                        <Show when=move || actions.can_edit>
                            <a href="#" class="edit-comment" on:click=on_edit>"Edit"</a>
                        </Show>
                        <Show when=move || actions.can_edit && actions.can_delete>
                            " | "
                        </Show>
                        <Show when=move || actions.can_delete>
                            <a href="#" class="delete-comment" on:click=on_delete>"Delete"</a>
                        </Show>
                    </span>
                </Show>
            </footer>
        </blockquote>
    }
}

#[component]
fn EditCommentForm(id: i64) -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let busy = RwSignal::new(false);
    let draft = move || store.with(|s| s.editing.as_ref().map(|e| e.draft.clone()).unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(text) = normalize_content(&draft()) else {
            return;
        };
        busy.set(true);
        spawn_request(async move {
            match api::update_comment(id, text).await {
                Ok(comment) => {
                    dispatch(store, Action::CommentUpdated(comment));
                    notify_success(store, COMMENT_UPDATED);
                }
                Err(err) => notify_failure(store, "Update", &err),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="edit-comment-form" on:submit=on_submit>
            <textarea
                name="content"
                rows="3"
                required
                prop:value=draft
                on:input=move |ev| dispatch(store, Action::EditDraft(event_target_value(&ev)))
            ></textarea>
            <div class="grid">
                <button type="submit" disabled=move || busy.get()>"Save changes"</button>
                <button
                    type="button"
                    class="cancel-edit secondary outline"
                    on:click=move |_| dispatch(store, Action::CancelEdit)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
