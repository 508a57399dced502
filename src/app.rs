//! Grocery Bud App
//!
//! Root component: loads the list from storage and lays out the form,
//! the list and the clear button.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GroceryForm, GroceryList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let state = AppState::load(&LocalStorage, &config.storage_key);
    log::info!("[APP] Loaded {} items from '{}'", state.list.items.len(), config.storage_key);

    let store = Store::new(state);
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    let has_items = move || store.list().with(|list| !list.items.is_empty());

    view! {
        <section class="section-center">
            <GroceryForm />
            <div class="grocery-container">
                <Show when=has_items>
                    <GroceryList />
                    <button class="clear-btn" on:click=move |_| ctx.clear()>
                        "clear items"
                    </button>
                </Show>
            </div>
        </section>
    }
}
