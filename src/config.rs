//! App Configuration
//!
//! Compiled-in settings, provided to components via context.

/// Key the collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "list";

/// How long a notification stays on screen
pub const DEFAULT_ALERT_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub alert_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            alert_duration_ms: DEFAULT_ALERT_DURATION_MS,
        }
    }
}
