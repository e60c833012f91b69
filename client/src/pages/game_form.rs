//! Game add/edit page root.

use leptos::prelude::*;
use ratings::evaluation::GameStructure;

use crate::components::list_editor::StructureEditorView;

#[component]
pub fn GameFormPage(initial: GameStructure) -> impl IntoView {
    view! { <StructureEditorView initial=initial /> }
}
