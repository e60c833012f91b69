//! Game details page: rating panels, forms, comments and admin actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into `#game-details-app`. The mount code provides the page store,
//! the shared UI state and the `GameRef`; this page wires the confirmation
//! dialog to [`execute`], which performs the request behind each confirmed
//! destructive action.
//!
//! DESIGN
//! ======
//! Forms open the dialog rather than calling the backend themselves, so
//! every retraction and deletion funnels through one executor and one
//! failure path.

#[cfg(test)]
#[path = "game_details_test.rs"]
mod game_details_test;

use leptos::prelude::*;
use ratings::confirm::ConfirmAction;
use ratings::error::RequestError;
use ratings::store::{Action, PageStore};
use ratings::wire::{DifficultyRatingResponse, MessageResponse, QualityRatingResponse};

use crate::components::comments::{CommentForm, CommentList};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::context_panel::DifficultyPanel;
use crate::components::delete_game::DeleteGameButton;
use crate::components::difficulty_form::DifficultyForm;
use crate::components::quality_form::QualityForm;
use crate::components::quality_panel::QualityPanel;
use crate::components::toast::Toast;
use crate::net::api;
use crate::state::page::{
    COMMENT_DELETED, DIFFICULTY_RETRACTED, QUALITY_RETRACTED, dispatch, notify_failure, notify_success,
    spawn_request, success_text,
};
use crate::util::page_data::{GameRef, navigate};

pub const GAME_DELETED: &str = "Game deleted.";
pub const GAMES_PATH: &str = "/games";

/// Pause between the deletion notice and leaving the page.
#[cfg(feature = "csr")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_millis(1200);

/// Result of the request behind a confirmed action.
#[derive(Debug)]
pub enum Outcome {
    QualityRetracted(Result<QualityRatingResponse, RequestError>),
    DifficultyRetracted(Result<DifficultyRatingResponse, RequestError>),
    CommentDeleted { id: i64, result: Result<(), RequestError> },
    GameDeleted(Result<MessageResponse, RequestError>),
}

impl Outcome {
    /// Action name used in `"<action> failed: ..."` notices.
    fn failure_label(&self) -> &'static str {
        match self {
            Self::QualityRetracted(_) | Self::DifficultyRetracted(_) => "Retract",
            Self::CommentDeleted { .. } | Self::GameDeleted(_) => "Delete",
        }
    }
}

/// Own ratings are fetched only for a logged-in viewer whose page came
/// without the `user-ratings-data` blob.
fn needs_ratings_fetch(logged_in: bool, blob_present: bool) -> bool {
    logged_in && !blob_present
}

/// Apply a finished request to the store: update it and show a success
/// notice, or leave it untouched and show the failure. Returns `true` when
/// the game was deleted and the page should leave.
pub fn settle(store: RwSignal<PageStore>, outcome: Outcome) -> bool {
    let label = outcome.failure_label();
    match outcome {
        Outcome::QualityRetracted(Ok(resp)) => {
            let text = success_text(resp.message.clone(), QUALITY_RETRACTED);
            dispatch(store, Action::QualityRetracted(resp));
            notify_success(store, text);
        }
        Outcome::DifficultyRetracted(Ok(resp)) => {
            let text = success_text(resp.message.clone(), DIFFICULTY_RETRACTED);
            dispatch(store, Action::DifficultyRetracted(resp));
            notify_success(store, text);
        }
        Outcome::CommentDeleted { id, result: Ok(()) } => {
            dispatch(store, Action::CommentRemoved(id));
            notify_success(store, COMMENT_DELETED);
        }
        Outcome::GameDeleted(Ok(resp)) => {
            notify_success(store, success_text(resp.message, GAME_DELETED));
            return true;
        }
        Outcome::QualityRetracted(Err(err))
        | Outcome::DifficultyRetracted(Err(err))
        | Outcome::CommentDeleted { result: Err(err), .. }
        | Outcome::GameDeleted(Err(err)) => notify_failure(store, label, &err),
    }
    false
}

/// Perform the request behind a confirmed action and report the outcome.
pub fn execute(action: ConfirmAction, store: RwSignal<PageStore>, game_id: i64) {
    spawn_request(async move {
        let outcome = match action {
            ConfirmAction::RetractQuality => Outcome::QualityRetracted(api::retract_quality(game_id).await),
            ConfirmAction::RetractDifficulty(key) => {
                Outcome::DifficultyRetracted(api::retract_difficulty(game_id, key).await)
            }
            ConfirmAction::DeleteComment(id) => Outcome::CommentDeleted { id, result: api::delete_comment(id).await },
            ConfirmAction::DeleteGame { id, .. } => Outcome::GameDeleted(api::delete_game(id).await),
        };
        if settle(store, outcome) {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(REDIRECT_DELAY).await;
            navigate(GAMES_PATH);
        }
    });
}

#[component]
pub fn GameDetailsPage(ratings_embedded: bool) -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let game_id = expect_context::<GameRef>().id;

    if needs_ratings_fetch(store.with_untracked(PageStore::is_logged_in), ratings_embedded) {
        spawn_request(async move {
            match api::fetch_my_ratings(game_id).await {
                Ok(ratings) => dispatch(store, Action::RatingsLoaded(ratings)),
                Err(err) => {
                    #[cfg(feature = "csr")]
                    log::warn!("my-ratings fetch failed: {err}");
                    let _ = err;
                }
            }
        });
    }

    let logged_in = move || store.with(PageStore::is_logged_in);
    let on_confirmed = Callback::new(move |action: ConfirmAction| execute(action, store, game_id));

    view! {
        <div class="game-details">
            <section class="ratings-grid">
                <article class="rating-card" id="quality-card">
                    <h3>"Quality"</h3>
                    <QualityPanel />
                    <Show when=logged_in fallback=|| view! { <p class="login-hint">"Log in to rate this game."</p> }>
                        <QualityForm />
                    </Show>
                </article>
                <article class="rating-card" id="difficulty-card">
                    <h3>"Difficulty"</h3>
                    <DifficultyPanel />
                    <Show when=logged_in>
                        <DifficultyForm />
                    </Show>
                </article>
            </section>
            <section class="comments-card">
                <h3>"Comments"</h3>
                <CommentForm />
                <CommentList />
            </section>
            <DeleteGameButton />
            <ConfirmDialog on_confirmed=on_confirmed />
            <Toast />
        </div>
    }
}
