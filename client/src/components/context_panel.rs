//! Difficulty panel: context selectors, headline score, realm and chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the viewed context from the page store. Changing either selector
//! dispatches a selection action; everything else on the panel (score,
//! realm, caption, per-option counts, chart) is derived from the store.

use leptos::prelude::*;
use ratings::chart::Series;
use ratings::config::Choice;
use ratings::context::{context_caption, option_label};
use ratings::store::{Action, PageStore};

use crate::components::radar_chart::RadarChart;
use crate::state::page::dispatch;

#[component]
pub fn DifficultyPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let config = store.with_untracked(|s| s.config.clone());

    let view_state = Memo::new(move |_| store.with(PageStore::context_view));
    let counts = Memo::new(move |_| store.with(PageStore::option_counts));

    let difficulty_options = options(
        config.difficulty_choices(),
        move || store.with(|s| s.view_context.difficulty),
        move |id| counts.with(|c| c.difficulty(id)),
    );
    let ship_options = options(
        config.ship_choices(),
        move || store.with(|s| s.view_context.ship),
        move |id| counts.with(|c| c.ship(id)),
    );

    view! {
        <section class="difficulty-panel">
            <div class="difficulty-panel__selectors">
                <select
                    id="difficulty-context-selector"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse() {
                            dispatch(store, Action::SelectViewDifficulty(id));
                        }
                    }
                >
                    {difficulty_options}
                </select>
                <select
                    id="ship-context-selector"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse() {
                            dispatch(store, Action::SelectViewShip(id));
                        }
                    }
                >
                    {ship_options}
                </select>
            </div>
            <p class="difficulty-panel__score">
                <strong id="overall-difficulty-display">{move || view_state.get().score_text}</strong>
                " "
                <span id="overall-difficulty-realm" class="difficulty-panel__realm">
                    {move || view_state.get().realm}
                </span>
            </p>
            <p id="context-info" class="difficulty-panel__caption">
                {move || context_caption(&view_state.get())}
            </p>
            <RadarChart
                series=Series::Difficulty
                buckets=Signal::derive(move || view_state.get().categories)
                max=Series::Difficulty.scale(&config)
            />
        </section>
    }
}

/// `<option>` list whose labels carry the live rating count.
fn options(
    choices: Vec<Choice>,
    selected: impl Fn() -> u32 + Copy + Send + Sync + 'static,
    count: impl Fn(u32) -> u32 + Copy + Send + Sync + 'static,
) -> impl IntoView {
    choices
        .into_iter()
        .map(|choice| {
            let id = choice.id;
            let base = choice.name;
            view! {
                <option value=id.to_string() selected=move || selected() == id>
                    {move || option_label(&base, count(id))}
                </option>
            }
        })
        .collect_view()
}
