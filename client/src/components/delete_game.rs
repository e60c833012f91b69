//! Admin-only "delete game" button.

use leptos::prelude::*;
use ratings::confirm::ConfirmAction;
use ratings::store::PageStore;

use crate::state::ui::UiState;
use crate::util::page_data::GameRef;

#[component]
pub fn DeleteGameButton() -> impl IntoView {
    let store = expect_context::<RwSignal<PageStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let game = expect_context::<GameRef>();

    let has_title = !game.title.trim().is_empty();

    let on_click = move |_| {
        let action = ConfirmAction::DeleteGame { id: game.id, title: game.title.clone() };
        ui.update(|u| {
            u.confirm(action);
        });
    };

    view! {
        <Show when=move || has_title && store.with(|s| s.session.is_admin)>
            <button type="button" id="delete-game-btn" class="btn btn--danger" on:click=on_click.clone()>
                "Delete game"
            </button>
        </Show>
    }
}
