//! Optional display-name field shared by the rating and comment forms.
//!
//! The last name submitted is stored locally and prefilled on later visits.

use leptos::prelude::*;

use crate::util::storage::{recall_display_name, remember_display_name};

/// Signal holding the name field, prefilled from storage.
pub fn display_name_signal() -> RwSignal<String> {
    RwSignal::new(recall_display_name().unwrap_or_default())
}

/// Store the current name and return it as a `user_name` form pair.
pub fn take_display_name(name: RwSignal<String>) -> Option<(String, String)> {
    remember_display_name(&name.get_untracked()).map(|n| ("user_name".to_owned(), n))
}

#[component]
pub fn DisplayNameInput(name: RwSignal<String>, #[prop(into)] id: String) -> impl IntoView {
    view! {
        <label class="display-name">
            "Display name"
            <input
                id=id
                type="text"
                name="user_name"
                autocomplete="nickname"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
        </label>
    }
}
