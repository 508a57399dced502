//! Application Context
//!
//! Actions shared by all components via the Leptos Context API. Each one
//! runs a single `AppState` operation against browser storage and posts
//! the resulting notification.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::models::Alert;
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    fn key(&self) -> String {
        self.config.with_value(|c| c.storage_key.clone())
    }

    /// Show `alert` and schedule its dismissal
    fn notify(&self, alert: Alert) {
        let seq = self.store.write().show_alert(alert);
        let duration = self.config.with_value(|c| c.alert_duration_ms);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store.write().expire_alert(seq);
        });
    }

    /// Mutate state without holding the store lock past the call
    fn apply<R>(&self, op: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.store.write();
        op(&mut state)
    }

    pub fn submit(&self) {
        let key = self.key();
        let alert = self.apply(|state| state.submit(&LocalStorage, &key));
        self.notify(alert);
    }

    pub fn begin_edit(&self, id: &str) {
        if let Some(alert) = self.apply(|state| state.begin_edit(id)) {
            self.notify(alert);
        }
    }

    pub fn cancel_edit(&self) {
        self.apply(|state| state.cancel_edit());
    }

    pub fn remove(&self, id: &str) {
        let key = self.key();
        let alert = self.apply(|state| state.remove(&LocalStorage, &key, id));
        self.notify(alert);
    }

    pub fn clear(&self) {
        let key = self.key();
        let alert = self.apply(|state| state.clear(&LocalStorage, &key));
        self.notify(alert);
    }

    pub fn dismiss_alert(&self) {
        let seq = self.store.with_untracked(|state| state.alert_seq);
        self.apply(|state| state.expire_alert(seq));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
