//! Quality score summary and chart.

use leptos::prelude::*;
use ratings::chart::Series;
use ratings::context::NO_RATING;
use ratings::store::PageStore;

use crate::components::radar_chart::RadarChart;

#[component]
pub fn QualityPanel() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let max = store.with_untracked(|s| Series::Quality.scale(&s.config));

    let score_text = move || {
        let score = store.with(|s| s.evaluation.overall_quality_score);
        if score > 0.0 { format!("{score:.2}") } else { NO_RATING.to_owned() }
    };

    view! {
        <section class="quality-panel">
            <p class="quality-panel__score">
                <strong id="overall-quality-display">{score_text}</strong>
                <span class="quality-panel__count">
                    {move || {
                        let n = store.with(|s| s.evaluation.quality_ratings_count);
                        format!(" ({n} {})", if n == 1 { "rating" } else { "ratings" })
                    }}
                </span>
            </p>
            <RadarChart
                series=Series::Quality
                buckets=Signal::derive(move || store.with(|s| s.evaluation.quality_scores.clone()))
                max=max
            />
        </section>
    }
}
