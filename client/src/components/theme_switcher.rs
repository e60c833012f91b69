//! Header button switching between light and dark themes.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = crate::util::theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            class="theme-switcher"
            type="button"
            on:click=on_click
            title=move || ui.get().theme.toggle_label()
            aria-label=move || ui.get().theme.toggle_label()
        >
            {move || if ui.get().theme.is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
