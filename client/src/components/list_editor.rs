//! Repeatable row editors for the game add/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the server-rendered game form. Rows live in a
//! `StructureEditor`; the serialized lists are rendered as hidden inputs that
//! always mirror the rows, so the browser submits them with the rest of the
//! form without a submit hook.

use leptos::prelude::*;
use ratings::evaluation::{GameStructure, NamedItem};
use ratings::list::{RowId, Rows, ShipRow, StructureEditor};

type RowsRef = fn(&StructureEditor) -> &Rows<NamedItem>;
type RowsMut = fn(&mut StructureEditor) -> &mut Rows<NamedItem>;

fn aliases(e: &StructureEditor) -> &Rows<NamedItem> {
    &e.aliases
}

fn aliases_mut(e: &mut StructureEditor) -> &mut Rows<NamedItem> {
    &mut e.aliases
}

fn difficulties(e: &StructureEditor) -> &Rows<NamedItem> {
    &e.difficulties
}

fn difficulties_mut(e: &mut StructureEditor) -> &mut Rows<NamedItem> {
    &mut e.difficulties
}

#[component]
pub fn StructureEditorView(initial: GameStructure) -> impl IntoView {
    let editor = RwSignal::new(StructureEditor::new(initial));
    let hidden = Memo::new(move |_| editor.with(|e| e.hidden_fields().ok()));

    view! {
        <div class="structure-editor">
            <NamedListEditor
                editor=editor
                title="Aliases"
                placeholder="Alias or translated title"
                list_id="aliases-list"
                add_id="add-alias-btn"
                rows=aliases
                rows_mut=aliases_mut
            />
            <NamedListEditor
                editor=editor
                title="Difficulty levels"
                placeholder="Difficulty name"
                list_id="difficulties-list"
                add_id="add-difficulty-btn"
                rows=difficulties
                rows_mut=difficulties_mut
            />
            <ShipListEditor editor=editor />
            {move || {
                hidden
                    .get()
                    .map(|fields| {
                        fields
                            .into_iter()
                            .map(|f| view! { <input type="hidden" id=f.id name=f.name value=f.value /> })
                            .collect_view()
                    })
            }}
        </div>
    }
}

#[component]
fn NamedListEditor(
    editor: RwSignal<StructureEditor>,
    title: &'static str,
    placeholder: &'static str,
    list_id: &'static str,
    add_id: &'static str,
    rows: RowsRef,
    rows_mut: RowsMut,
) -> impl IntoView {
    let entries = move || {
        editor.with(|e| rows(e).iter().map(|r| (r.id, r.item.name.clone())).collect::<Vec<_>>())
    };

    view! {
        <fieldset class="dynamic-list">
            <legend>{title}</legend>
            <div class="dynamic-list__items" id=list_id>
                <For
                    each=entries
                    key=|(id, _)| *id
                    children=move |(id, name): (RowId, String)| {
                        view! {
                            <ItemRow
                                name=name
                                placeholder=placeholder
                                on_rename=Callback::new(move |text: String| {
                                    editor.update(|e| {
                                        if let Some(item) = rows_mut(e).get_mut(id) {
                                            item.name = text;
                                        }
                                    });
                                })
                                on_shift=Callback::new(move |up: bool| {
                                    editor.update(|e| {
                                        rows_mut(e).shift(id, up);
                                    });
                                })
                                on_remove=Callback::new(move |()| {
                                    editor.update(|e| {
                                        rows_mut(e).remove(id);
                                    });
                                })
                            />
                        }
                    }
                />
            </div>
            <button
                type="button"
                id=add_id
                class="secondary outline"
                on:click=move |_| {
                    editor.update(|e| {
                        rows_mut(e).push(NamedItem::default());
                    });
                }
            >
                "+ Add"
            </button>
        </fieldset>
    }
}

#[component]
fn ShipListEditor(editor: RwSignal<StructureEditor>) -> impl IntoView {
    let ships = move || editor.with(|e| e.ships.iter().map(|r| (r.id, r.item.name.clone())).collect::<Vec<_>>());

    view! {
        <fieldset class="dynamic-list">
            <legend>"Ships / characters"</legend>
            <div class="dynamic-list__items" id="ships-list">
                <For
                    each=ships
                    key=|(id, _)| *id
                    children=move |(ship_id, name): (RowId, String)| view! { <ShipBlock editor=editor ship_id=ship_id name=name /> }
                />
            </div>
            <button
                type="button"
                id="add-ship-btn"
                class="secondary outline"
                on:click=move |_| {
                    editor.update(|e| {
                        e.ships.push(ShipRow::default());
                    });
                }
            >
                "+ Add ship"
            </button>
        </fieldset>
    }
}

#[component]
fn ShipBlock(editor: RwSignal<StructureEditor>, ship_id: RowId, name: String) -> impl IntoView {
    let update_ship = move |f: &dyn Fn(&mut ShipRow)| {
        editor.update(|e| {
            if let Some(ship) = e.ships.get_mut(ship_id) {
                f(ship);
            }
        });
    };

    let children = move || {
        editor.with(|e| {
            e.ships
                .iter()
                .find(|r| r.id == ship_id)
                .map(|r| r.item.children.iter().map(|c| (c.id, c.item.name.clone())).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="ship-block">
            <ItemRow
                name=name
                placeholder="Ship or character name"
                on_rename=Callback::new(move |text: String| update_ship(&|ship| ship.name.clone_from(&text)))
                on_shift=Callback::new(move |up: bool| {
                    editor.update(|e| {
                        e.ships.shift(ship_id, up);
                    });
                })
                on_remove=Callback::new(move |()| {
                    editor.update(|e| {
                        e.ships.remove(ship_id);
                    });
                })
            />
            <div class="enhancements-list">
                <For
                    each=children
                    key=|(id, _)| *id
                    children=move |(child_id, child): (RowId, String)| {
                        view! {
                            <ItemRow
                                name=child
                                placeholder="Form or loadout name"
                                on_rename=Callback::new(move |text: String| {
                                    update_ship(&|ship| {
                                        if let Some(item) = ship.children.get_mut(child_id) {
                                            item.name.clone_from(&text);
                                        }
                                    });
                                })
                                on_shift=Callback::new(move |up: bool| {
                                    update_ship(&|ship| {
                                        ship.children.shift(child_id, up);
                                    });
                                })
                                on_remove=Callback::new(move |()| {
                                    update_ship(&|ship| {
                                        ship.children.remove(child_id);
                                    });
                                })
                            />
                        }
                    }
                />
                <button
                    type="button"
                    class="secondary outline add-enhancement-btn"
                    on:click=move |_| update_ship(&|ship| {
                        ship.children.push(NamedItem::default());
                    })
                >
                    "+ Add form / loadout"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ItemRow(
    name: String,
    placeholder: &'static str,
    on_rename: Callback<String>,
    on_shift: Callback<bool>,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dynamic-list-item">
            <input
                type="text"
                class="item-name"
                required
                placeholder=placeholder
                value=name
                on:input=move |ev| on_rename.run(event_target_value(&ev))
            />
            <button type="button" class="move-btn" title="Move up" on:click=move |_| on_shift.run(true)>
                "↑"
            </button>
            <button type="button" class="move-btn" title="Move down" on:click=move |_| on_shift.run(false)>
                "↓"
            </button>
            <button type="button" class="remove-btn" title="Remove" on:click=move |_| on_remove.run(())>
                "×"
            </button>
        </div>
    }
}
