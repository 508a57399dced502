//! Grocery Form Component
//!
//! Single input that adds a new item, or renames the item being edited.

use leptos::prelude::*;

use crate::components::AlertBanner;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroceryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let is_editing = move || store.list().with(|list| list.is_editing());

    view! {
        <form class="grocery-form" on:submit=on_submit>
            <AlertBanner />
            <h3>"Grocery Bud"</h3>
            <div class="form-control">
                <input
                    type="text"
                    class="grocery"
                    placeholder="ex.eggs"
                    prop:value=move || store.input().get()
                    on:input=move |ev| store.input().set(event_target_value(&ev))
                />
                <button type="submit" class="submit-btn">
                    {move || store.with(|state| state.submit_label())}
                </button>
                <Show when=is_editing>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
