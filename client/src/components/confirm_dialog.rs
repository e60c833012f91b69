//! Modal dialog driving the confirmation state machine.
//!
//! The dialog is visible while a confirmation is pending. Game deletion
//! first asks for the game title; a mismatch cancels with a notice.
//! A confirmed action is handed to `on_confirmed` exactly once.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;
use ratings::confirm::{ConfirmAction, Confirmation, Stage};
use ratings::store::{Action, NoticeKind, PageStore};

use crate::state::page::dispatch;
use crate::state::ui::UiState;

/// Text for the current stage of a pending confirmation.
fn stage_prompt(confirmation: &Confirmation) -> Option<String> {
    match confirmation {
        Confirmation::Pending { stage: Stage::TypeName { expected, .. }, .. } => Some(Stage::type_name_prompt(expected)),
        Confirmation::Pending { action, stage: Stage::Final } => Some(action.prompt()),
        _ => None,
    }
}

fn is_type_name(confirmation: &Confirmation) -> bool {
    matches!(confirmation, Confirmation::Pending { stage: Stage::TypeName { .. }, .. })
}

#[component]
pub fn ConfirmDialog(on_confirmed: Callback<ConfirmAction>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<RwSignal<PageStore>>();

    let settle = move || {
        let mut confirmed = None;
        let mut cancelled = None;
        ui.update(|u| {
            confirmed = u.confirmation.take_confirmed();
            cancelled = u.confirmation.take_cancelled();
        });
        if let Some(action) = confirmed {
            on_confirmed.run(action);
        }
        if let Some(text) = cancelled.and_then(|reason| reason.notice()) {
            dispatch(store, Action::Notify { kind: NoticeKind::Error, text: text.to_owned() });
        }
    };

    let accept = move || {
        ui.update(|u| u.confirmation.advance());
        settle();
    };
    let dismiss = move || {
        ui.update(|u| u.confirmation.cancel());
        settle();
    };

    let entered = move || match ui.with(|u| u.confirmation.clone()) {
        Confirmation::Pending { stage: Stage::TypeName { entered, .. }, .. } => entered,
        _ => String::new(),
    };

    view! {
        <Show when=move || ui.with(|u| u.confirmation.is_pending())>
            <div class="dialog-backdrop" on:click=move |_| dismiss()>
                <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                    <p class="dialog__prompt">{move || ui.with(|u| stage_prompt(&u.confirmation)).unwrap_or_default()}</p>
                    <Show when=move || ui.with(|u| is_type_name(&u.confirmation))>
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=entered
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                ui.update(|u| u.confirmation.enter(&text));
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    accept();
                                }
                            }
                        />
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn secondary outline" on:click=move |_| dismiss()>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| accept()>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
