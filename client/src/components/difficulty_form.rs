//! Difficulty rating form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form has its own (difficulty level, ship) selectors, independent of
//! the panel's view selectors. Each configured dimension gets a slider and
//! a number input kept in sync. Switching the form context prefills the
//! viewer's earlier rating for that context, or the slider default.
//!
//! Number inputs accept free typing: parsable text moves the slider
//! (clamped to the configured range), anything else is left alone until the
//! field is committed or loses focus, when it reverts to the slider value.

use leptos::prelude::*;
use ratings::config::{Choice, Dimension};
use ratings::confirm::ConfirmAction;
use ratings::context::context_label;
use ratings::evaluation::RatingValues;
use ratings::form::{committed_text, difficulty_fields, parse_clamped, rating_field, slider_after_input, submitted_values};
use ratings::store::{Action, PageStore};

use crate::components::display_name::{DisplayNameInput, display_name_signal, take_display_name};
use crate::net::api;
use crate::state::page::{DIFFICULTY_SUBMITTED, dispatch, notify_failure, notify_success, spawn_request, success_text};
use crate::state::ui::UiState;
use crate::util::page_data::GameRef;

#[component]
pub fn DifficultyForm() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let game_id = expect_context::<GameRef>().id;
    let config = store.with_untracked(|s| s.config.clone());

    let prefill = Memo::new(move |_| store.with(PageStore::difficulty_prefill));
    let values = RwSignal::new(RatingValues::new());
    Effect::new(move || values.set(prefill.get().values));

    let name = display_name_signal();
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (mut fields, submitted) = store.with_untracked(|s| {
            let current = values.get_untracked();
            (
                difficulty_fields(&s.config, s.form_context, &current),
                submitted_values(&s.config.difficulty_dimensions, &current),
            )
        });
        fields.extend(take_display_name(name));
        busy.set(true);
        spawn_request(async move {
            match api::submit_difficulty(game_id, fields).await {
                Ok(response) => {
                    let text = success_text(response.message.clone(), DIFFICULTY_SUBMITTED);
                    dispatch(store, Action::DifficultyRated { response, submitted });
                    notify_success(store, text);
                }
                Err(err) => notify_failure(store, "Submit", &err),
            }
            busy.set(false);
        });
    };

    let on_retract = move |_| {
        let key = store.with_untracked(|s| s.form_context);
        ui.update(|u| {
            u.confirm(ConfirmAction::RetractDifficulty(key));
        });
    };

    let label_config = config.clone();
    let label = move || store.with(|s| context_label(&label_config, s.form_context));

    let rows = config
        .difficulty_dimensions
        .iter()
        .map(|dim| {
            view! {
                <SliderRow
                    dimension=dim.clone()
                    values=values
                    min=config.difficulty_min
                    max=config.difficulty_max
                    fallback=config.difficulty_default()
                />
            }
        })
        .collect_view();

    view! {
        <form id="difficulty-rating-form" class="rating-form" on:submit=on_submit>
            <div class="rating-form__context">
                <select
                    id="form-difficulty-selector"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse() {
                            dispatch(store, Action::SelectFormDifficulty(id));
                        }
                    }
                >
                    {choice_options(config.difficulty_choices(), move || store.with(|s| s.form_context.difficulty))}
                </select>
                <select
                    id="form-ship-selector"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse() {
                            dispatch(store, Action::SelectFormShip(id));
                        }
                    }
                >
                    {choice_options(config.ship_choices(), move || store.with(|s| s.form_context.ship))}
                </select>
            </div>
            <p class="rating-form__context-label">
                <span id="form-context-label">{label}</span>
                <Show when=move || prefill.with(|p| p.has_rating)>
                    <span id="difficulty-rating-status" class="badge">"Rated"</span>
                </Show>
            </p>
            {rows}
            <DisplayNameInput name=name id="user_name_rating_difficulty" />
            <div class="rating-form__actions">
                <button type="submit" disabled=move || busy.get() aria-busy=move || busy.get().to_string()>
                    "Submit difficulty rating"
                </button>
                <Show when=move || prefill.with(|p| p.has_rating)>
                    <button
                        type="button"
                        id="delete-difficulty-rating-btn"
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

fn choice_options(choices: Vec<Choice>, selected: impl Fn() -> u32 + Copy + Send + Sync + 'static) -> impl IntoView {
    choices
        .into_iter()
        .map(|choice| {
            let id = choice.id;
            view! {
                <option value=id.to_string() selected=move || selected() == id>
                    {choice.name}
                </option>
            }
        })
        .collect_view()
}

#[component]
fn SliderRow(dimension: Dimension, values: RwSignal<RatingValues>, min: i32, max: i32, fallback: i32) -> impl IntoView {
    let field = dimension.field.clone();
    let current = {
        let field = field.clone();
        move || values.with(|v| v.get(&field).copied().unwrap_or(fallback))
    };
    let set = move |n: i32| {
        values.update(|v| {
            v.insert(field.clone(), n);
        });
    };

    let text = RwSignal::new(String::new());
    {
        let current = current.clone();
        Effect::new(move || text.set(current().to_string()));
    }

    let on_slide = {
        let set = set.clone();
        move |ev: leptos::ev::Event| {
            if let Some(n) = parse_clamped(&event_target_value(&ev), min, max) {
                set(n);
            }
        }
    };

    let on_type = {
        let current = current.clone();
        move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            let before = current();
            let next = slider_after_input(&raw, before, min, max);
            text.set(raw);
            if next != before {
                set(next);
            }
        }
    };

    let commit = {
        let current = current.clone();
        move || text.set(committed_text(&text.get_untracked(), current(), min, max))
    };
    let commit_on_blur = commit.clone();

    let slider_value = current;
    let input_id = format!("difficulty-value-{}", dimension.field);

    view! {
        <div class="difficulty-slider-row">
            <label for=input_id.clone()>{dimension.name.clone()}</label>
            <input
                type="range"
                class="difficulty-slider"
                id=format!("rating-difficulty-{}", dimension.field)
                min=min
                max=max
                prop:value=move || slider_value().to_string()
                on:input=on_slide
            />
            <input
                type="number"
                class="difficulty-value-input"
                id=input_id
                name=rating_field(&dimension.field)
                min=min
                max=max
                prop:value=move || text.get()
                on:input=on_type
                on:change=move |_| commit()
                on:blur=move |_| commit_on_blur()
            />
        </div>
    }
}
