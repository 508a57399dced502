//! Application State Store
//!
//! `AppState` is the caller-owned state the UI works against: the list with
//! its edit cursor, the input buffer and the current notification. Every
//! mutating method goes through `commit`, which writes the collection back
//! to storage before returning.

use reactive_stores::Store;

use crate::models::Alert;
use crate::reducer::{ListState, ReduceResult, Submitted, ValidationError};
use crate::storage::{self, KeyValueStore};

pub const MSG_EMPTY: &str = "please enter value";
pub const MSG_ADDED: &str = "Item added to the list";
pub const MSG_UPDATED: &str = "value changed";
pub const MSG_MISSING: &str = "item no longer exists";
pub const MSG_REMOVED: &str = "item removed";
pub const MSG_CLEARED: &str = "List Cleared";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items and edit cursor
    pub list: ListState,
    /// Text input buffer
    pub input: String,
    /// Notification currently shown
    pub alert: Option<Alert>,
    /// Bumped on every new alert so stale dismiss timers are ignored
    pub alert_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

fn alert_for(result: &ReduceResult<Submitted>) -> Alert {
    match result {
        Ok(Submitted::Added) => Alert::success(MSG_ADDED),
        Ok(Submitted::Updated) => Alert::success(MSG_UPDATED),
        Err(ValidationError::Empty) => Alert::danger(MSG_EMPTY),
        Err(ValidationError::NotFound(_)) => Alert::danger(MSG_MISSING),
    }
}

impl AppState {
    /// Initial state from whatever storage holds
    pub fn load(backend: &impl KeyValueStore, key: &str) -> Self {
        Self {
            list: ListState::new(storage::load(backend, key)),
            ..Default::default()
        }
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.list.is_editing() { "edit" } else { "submit" }
    }

    /// Run one reducer operation, then persist the collection
    pub fn commit<R>(
        &mut self,
        backend: &impl KeyValueStore,
        key: &str,
        op: impl FnOnce(&mut ListState) -> R,
    ) -> R {
        let result = op(&mut self.list);
        if let Err(e) = storage::persist(backend, key, &self.list.items) {
            log::error!("[STORAGE] Persist failed: {}", e);
        }
        result
    }

    /// Submit the input buffer as a new item or as the edited title
    pub fn submit(&mut self, backend: &impl KeyValueStore, key: &str) -> Alert {
        let input = self.input.clone();
        let result = self.commit(backend, key, |list| list.submit(&input));
        if !matches!(result, Err(ValidationError::Empty)) {
            self.input.clear();
        }
        alert_for(&result)
    }

    /// Enter edit mode for `id`; `None` on success
    pub fn begin_edit(&mut self, id: &str) -> Option<Alert> {
        match self.list.begin_edit(id) {
            Ok(title) => {
                self.input = title;
                None
            }
            Err(_) => Some(Alert::danger(MSG_MISSING)),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
        self.input.clear();
    }

    pub fn remove(&mut self, backend: &impl KeyValueStore, key: &str, id: &str) -> Alert {
        let was_editing = self.list.is_editing_item(id);
        self.commit(backend, key, |list| list.remove(id));
        if was_editing {
            self.input.clear();
        }
        Alert::danger(MSG_REMOVED)
    }

    pub fn clear(&mut self, backend: &impl KeyValueStore, key: &str) -> Alert {
        let was_editing = self.list.is_editing();
        self.commit(backend, key, |list| list.clear());
        if was_editing {
            self.input.clear();
        }
        Alert::danger(MSG_CLEARED)
    }

    /// Replace the current alert, returning its sequence number
    pub fn show_alert(&mut self, alert: Alert) -> u32 {
        self.alert_seq = self.alert_seq.wrapping_add(1);
        self.alert = Some(alert);
        self.alert_seq
    }

    /// Drop the alert if it is still the one numbered `seq`
    pub fn expire_alert(&mut self, seq: u32) {
        if self.alert_seq == seq {
            self.alert = None;
        }
    }
}
