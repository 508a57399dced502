//! Frontend Models
//!
//! Data structures shared by the reducer, storage and components.

use serde::{Deserialize, Serialize};

/// One grocery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique token, never changes after creation
    pub id: String,
    pub title: String,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Notification kind, doubles as the CSS class suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }
}

/// Transient notification describing the last operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub msg: String,
}

impl Alert {
    pub fn success(msg: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, msg: msg.into() }
    }

    pub fn danger(msg: impl Into<String>) -> Self {
        Self { kind: AlertKind::Danger, msg: msg.into() }
    }

    /// CSS class list for the banner
    pub fn class(&self) -> String {
        format!("alert alert-{}", self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_id_and_title_only() {
        let item = Item::new("1", "eggs");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"1","title":"eggs"}"#);
    }

    #[test]
    fn test_alert_class() {
        assert_eq!(Alert::success("ok").class(), "alert alert-success");
        assert_eq!(Alert::danger("no").class(), "alert alert-danger");
    }
}
