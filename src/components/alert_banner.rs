//! Alert Banner Component
//!
//! Shows the latest notification until its timer runs out or it is clicked.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    move || {
        store.alert().get().map(|alert| {
            let class = alert.class();
            view! {
                <p class=class on:click=move |_| ctx.dismiss_alert()>
                    {alert.msg}
                </p>
            }
        })
    }
}
