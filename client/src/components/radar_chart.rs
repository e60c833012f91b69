//! SVG radar chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout comes from `ratings::chart::build`; this component only maps the
//! result onto SVG elements. It re-renders whenever the buckets or the theme
//! change. Hovering a data point shows its tooltip below the chart.

use leptos::prelude::*;
use ratings::chart::{self, Series};
use ratings::evaluation::ScoreBucket;

use crate::state::ui::UiState;

const SIZE: f64 = 360.0;

#[component]
pub fn RadarChart(series: Series, #[prop(into)] buckets: Signal<Vec<ScoreBucket>>, max: f64) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hovered = RwSignal::new(None::<usize>);

    let layout = Memo::new(move |_| chart::build(series, &buckets.get(), max, ui.get().theme, SIZE));

    let tooltip = move || {
        let index = hovered.get()?;
        let layout = layout.get();
        let axis = layout.axes.get(index)?;
        Some(format!("{}: {}", axis.category, axis.tooltip))
    };

    view! {
        <figure class="radar-chart">
            <figcaption class="radar-chart__title">{series.title()}</figcaption>
            <svg
                class="radar-chart__svg"
                viewBox=format!("0 0 {SIZE} {SIZE}")
                role="img"
                aria-label=series.title()
            >
                {move || {
                    let layout = layout.get();
                    let palette = layout.palette.clone();
                    let outer = layout.rings.last().cloned().unwrap_or_default();
                    let rings = layout
                        .rings
                        .iter()
                        .map(|points| {
                            view! {
                                <polygon points=points.clone() fill="none" stroke=palette.grid stroke-width="1" />
                            }
                        })
                        .collect::<Vec<_>>();
                    let spokes = layout
                        .axes
                        .iter()
                        .map(|axis| {
                            view! {
                                <line
                                    x1=layout.center.x
                                    y1=layout.center.y
                                    x2=axis.end.x
                                    y2=axis.end.y
                                    stroke=palette.grid
                                    stroke-dasharray="4 4"
                                />
                            }
                        })
                        .collect::<Vec<_>>();
                    let labels = layout
                        .axes
                        .iter()
                        .map(|axis| {
                            view! {
                                <text
                                    class="radar-chart__axis-label"
                                    x=axis.label_at.x
                                    y=axis.label_at.y
                                    text-anchor=axis.label_anchor.as_svg()
                                    dominant-baseline="middle"
                                    fill=palette.axis_label
                                    stroke=palette.axis_label_backdrop
                                    stroke-width="4"
                                    paint-order="stroke"
                                    font-weight="bold"
                                >
                                    {axis.category.clone()}
                                </text>
                            }
                        })
                        .collect::<Vec<_>>();
                    let points = layout
                        .axes
                        .iter()
                        .enumerate()
                        .map(|(i, axis)| {
                            let lines = axis.badge.clone();
                            let x = axis.value.x;
                            let badge_y = axis.value.y - 12.0;
                            view! {
                                <g
                                    class="radar-chart__point"
                                    on:mouseenter=move |_| hovered.set(Some(i))
                                    on:mouseleave=move |_| hovered.set(None)
                                >
                                    <circle cx=x cy=axis.value.y r="5" fill=palette.border.clone() />
                                    <text
                                        class="radar-chart__badge"
                                        x=x
                                        y=badge_y
                                        text-anchor="middle"
                                        fill=palette.badge_text
                                        stroke=palette.badge_background.clone()
                                        stroke-width="3"
                                        paint-order="stroke"
                                        font-weight="bold"
                                        font-size="12"
                                    >
                                        {lines
                                            .into_iter()
                                            .enumerate()
                                            .map(|(n, line)| {
                                                let dy = if n == 0 { "0" } else { "1.2em" };
                                                view! { <tspan x=x dy=dy>{line}</tspan> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </text>
                                </g>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <polygon points=outer fill=palette.fill_outer.clone() stroke="none" />
                        {rings}
                        {spokes}
                        <polygon
                            class="radar-chart__area"
                            points=layout.area.clone()
                            fill=palette.fill_inner.clone()
                            stroke=palette.border.clone()
                            stroke-width="3"
                        />
                        {labels}
                        {points}
                    }
                }}
            </svg>
            <p class=move || {
                if hovered.get().is_none() {
                    "radar-chart__tooltip radar-chart__tooltip--hidden"
                } else {
                    "radar-chart__tooltip"
                }
            }>{tooltip}</p>
        </figure>
    }
}
