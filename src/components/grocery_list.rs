//! Grocery List Component
//!
//! Renders the collection with per-item edit and remove buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let items = move || store.list().with(|list| list.items.clone());

    view! {
        <div class="grocery-list">
            <For
                each=items
                // Title is part of the key so renamed items re-render
                key=|item| (item.id.clone(), item.title.clone())
                children=move |item| {
                    let id = item.id.clone();
                    let edit_id = item.id.clone();
                    let remove_id = item.id.clone();
                    let item_class = move || {
                        if store.list().with(|list| list.is_editing_item(&id)) {
                            "grocery-item editing"
                        } else {
                            "grocery-item"
                        }
                    };

                    view! {
                        <article class=item_class>
                            <p class="title">{item.title}</p>
                            <div class="btn-container">
                                <button
                                    type="button"
                                    class="edit-btn"
                                    on:click=move |_| ctx.begin_edit(&edit_id)
                                >
                                    "edit"
                                </button>
                                <button
                                    type="button"
                                    class="delete-btn"
                                    on:click=move |_| ctx.remove(&remove_id)
                                >
                                    "remove"
                                </button>
                            </div>
                        </article>
                    }
                }
            />
        </div>
    }
}
