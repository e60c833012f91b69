//! Quality rating form: one star row per configured dimension.
//!
//! The caption next to each row shows `(n/max)` for the hovered or chosen
//! star. Submitting posts every chosen value; the retract button only
//! appears once the viewer has a quality rating and goes through the
//! confirmation dialog.

use leptos::prelude::*;
use ratings::confirm::ConfirmAction;
use ratings::config::Dimension;
use ratings::evaluation::RatingValues;
use ratings::form::{quality_fields, rating_field, star_caption};
use ratings::store::{Action, PageStore};

use crate::components::display_name::{DisplayNameInput, display_name_signal, take_display_name};
use crate::net::api;
use crate::state::page::{QUALITY_SUBMITTED, dispatch, notify_failure, notify_success, spawn_request, success_text};
use crate::state::ui::UiState;
use crate::util::page_data::GameRef;

#[component]
pub fn QualityForm() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let game_id = expect_context::<GameRef>().id;
    let config = store.with_untracked(|s| s.config.clone());

    let values = RwSignal::new(RatingValues::new());
    let name = display_name_signal();
    let busy = RwSignal::new(false);

    // Follow the stored rating: loading fills the stars, retraction clears them.
    let stored = Memo::new(move |_| store.with(|s| s.user_ratings.quality.clone()));
    Effect::new(move || values.set(stored.get().unwrap_or_default()));
    let has_rating = Memo::new(move |_| store.with(PageStore::has_quality_rating));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let submitted = values.get_untracked();
        let mut fields = store.with_untracked(|s| quality_fields(&s.config, &submitted));
        fields.extend(take_display_name(name));
        busy.set(true);
        spawn_request(async move {
            match api::submit_quality(game_id, fields).await {
                Ok(response) => {
                    let text = success_text(response.message.clone(), QUALITY_SUBMITTED);
                    dispatch(store, Action::QualityRated { response, submitted });
                    notify_success(store, text);
                }
                Err(err) => notify_failure(store, "Submit", &err),
            }
            busy.set(false);
        });
    };

    let on_retract = move |_| {
        ui.update(|u| {
            u.confirm(ConfirmAction::RetractQuality);
        });
    };

    let rows = config
        .quality_dimensions
        .iter()
        .map(|dim| view! { <StarRow dimension=dim.clone() values=values min=config.quality_min max=config.quality_max /> })
        .collect_view();

    view! {
        <form id="quality-rating-form" class="rating-form" on:submit=on_submit>
            {rows}
            <DisplayNameInput name=name id="user_name_rating_quality" />
            <div class="rating-form__actions">
                <button type="submit" disabled=move || busy.get() aria-busy=move || busy.get().to_string()>
                    "Submit quality rating"
                </button>
                <Show when=move || has_rating.get()>
                    <button
                        type="button"
                        id="delete-quality-rating-btn"
                        class="secondary outline"
                        disabled=move || busy.get()
                        on:click=on_retract
                    >
                        "Retract"
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[component]
fn StarRow(dimension: Dimension, values: RwSignal<RatingValues>, min: i32, max: i32) -> impl IntoView {
    let hovered = RwSignal::new(None::<i32>);
    let field = dimension.field.clone();
    let chosen = {
        let field = field.clone();
        move || values.with(|v| v.get(&field).copied())
    };

    let caption = {
        let chosen = chosen.clone();
        move || hovered.get().or_else(|| chosen()).map(|n| star_caption(n, max)).unwrap_or_default()
    };

    let stars = (min..=max)
        .map(|n| {
            let field = field.clone();
            let chosen = chosen.clone();
            view! {
                <button
                    type="button"
                    class=move || if chosen().is_some_and(|c| c >= n) { "star star--on" } else { "star" }
                    aria-label=format!("{n}/{max}")
                    on:click=move |_| {
                        values.update(|v| {
                            v.insert(field.clone(), n);
                        });
                    }
                    on:mouseenter=move |_| hovered.set(Some(n))
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="star-rating" data-category=dimension.name.clone() on:mouseleave=move |_| hovered.set(None)>
            <span class="star-rating__label">{dimension.name.clone()}</span>
            <span class="star-rating__stars" data-field=rating_field(&dimension.field)>{stars}</span>
            <span class="rating-value-display">{caption}</span>
        </div>
    }
}
