//! Mounting the Leptos roots into server-rendered pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no client-side router. Each backend page carries zero or more
//! placeholder elements; [`mount`] looks each one up and mounts the matching
//! root into it. Every root receives the same `RwSignal<UiState>` so the
//! header theme switcher and the game page charts agree on the theme.
//!
//! ERROR HANDLING
//! ==============
//! A placeholder whose page data cannot be read is logged and left empty;
//! the rest of the page keeps working.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Placeholder elements the client knows how to fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPoint {
    ThemeSwitcher,
    GameDetails,
    StructureEditor,
}

impl MountPoint {
    pub const ALL: [Self; 3] = [Self::ThemeSwitcher, Self::GameDetails, Self::StructureEditor];

    /// Element id of the placeholder.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ThemeSwitcher => "theme-switcher",
            Self::GameDetails => "game-details-app",
            Self::StructureEditor => "game-structure-editor",
        }
    }
}

/// Mount every root whose placeholder exists on the current page.
pub fn mount() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;

        use crate::state::ui::UiState;

        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        let ui = RwSignal::new(UiState::new(theme));

        for point in MountPoint::ALL {
            let Some(el) = browser::placeholder(point.element_id()) else {
                continue;
            };
            match point {
                MountPoint::ThemeSwitcher => browser::mount_theme_switcher(el, ui),
                MountPoint::GameDetails => browser::mount_game_details(el, ui),
                MountPoint::StructureEditor => browser::mount_structure_editor(el),
            }
        }
        crate::util::card_tilt::attach();
    }
}

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::MountPoint;
    use crate::components::theme_switcher::ThemeSwitcher;
    use crate::pages::game_details::GameDetailsPage;
    use crate::pages::game_form::GameFormPage;
    use crate::state::ui::UiState;
    use crate::util::page_data::{GameRef, USER_RATINGS_DATA, element_text, load_game_page, load_structure};

    pub(super) fn placeholder(id: &str) -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.get_element_by_id(id)?.dyn_into().ok()
    }

    pub(super) fn mount_theme_switcher(el: web_sys::HtmlElement, ui: RwSignal<UiState>) {
        leptos::mount::mount_to(el, move || {
            provide_context(ui);
            view! { <ThemeSwitcher /> }
        })
        .forget();
    }

    pub(super) fn mount_game_details(el: web_sys::HtmlElement, ui: RwSignal<UiState>) {
        let id = MountPoint::GameDetails.element_id();
        let Some(game) =
            GameRef::from_attributes(el.get_attribute("data-game-id").as_deref(), el.get_attribute("data-game-title").as_deref())
        else {
            log::error!("#{id}: missing or invalid data-game-id");
            return;
        };
        let store = match load_game_page(element_text) {
            Ok(store) => store,
            Err(err) => {
                log::error!("#{id}: {err}");
                return;
            }
        };
        let ratings_embedded = element_text(USER_RATINGS_DATA).is_some();
        log::info!("mounting game {} ({} comments)", game.id, store.evaluation.comments.len());

        leptos::mount::mount_to(el, move || {
            provide_context(ui);
            provide_context(RwSignal::new(store));
            provide_context(game);
            view! { <GameDetailsPage ratings_embedded=ratings_embedded /> }
        })
        .forget();
    }

    pub(super) fn mount_structure_editor(el: web_sys::HtmlElement) {
        let initial = match load_structure(element_text) {
            Ok(initial) => initial,
            Err(err) => {
                log::error!("#{}: {err}", MountPoint::StructureEditor.element_id());
                return;
            }
        };
        leptos::mount::mount_to(el, move || view! { <GameFormPage initial=initial /> }).forget();
    }
}
