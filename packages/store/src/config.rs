//! # Application configuration (`club-admin.toml`)
//!
//! The backend base URL is never hardcoded in request code; it comes from this
//! file, optionally overridden by the `CLUB_ADMIN_API_URL` variable.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [notifications]
//! toast_duration_secs = 3
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_VAR: &str = "CLUB_ADMIN_API_URL";

/// Top-level configuration stored in `club-admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Backend connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Toast notifications.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds before a toast dismisses itself. 0 keeps it until clicked.
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u32,
}

fn default_toast_duration() -> u32 {
    3
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_secs: default_toast_duration(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            notifications: NotificationConfig::default(),
        }
    }

    /// Builder method to set the toast duration.
    pub fn with_toast_duration(mut self, secs: u32) -> Self {
        self.notifications.toast_duration_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "club-admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Takes a lookup function instead of reading `std::env` so the wasm build
    /// can feed it `option_env!` values captured at compile time.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.notifications.toast_duration_secs, 3);
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"https://club.example/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://club.example/api");
        assert_eq!(config.notifications.toast_duration_secs, 3);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("http://10.0.0.2:9000").with_toast_duration(0);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_env_override() {
        let config = AppConfig::default().with_env_overrides(|name| {
            (name == API_URL_VAR).then(|| " https://override.example ".to_string())
        });
        assert_eq!(config.api.base_url, "https://override.example");

        let untouched = AppConfig::default().with_env_overrides(|_| Some("  ".to_string()));
        assert_eq!(untouched.api.base_url, "http://localhost:8080/api");
    }
}
