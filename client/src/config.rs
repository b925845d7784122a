//! Client configuration.
//!
//! Every field has a default so a partial JSON document (or none at all) is
//! enough to build a usable config. `FINBOARD_API_BASE` may be baked in at
//! compile time to point the REST client at another origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::notice::Severity;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_FALLBACK_PATH: &str = "/unauthorized";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level client configuration, provided to the component tree as context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin prefix for REST calls; empty means same-origin.
    pub api_base: String,
    /// Redirect target for the authentication guard.
    pub login_path: String,
    /// Redirect target for the role guard.
    pub fallback_path: String,
    pub storage: StorageKeys,
    pub auto_hide: AutoHide,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            fallback_path: DEFAULT_FALLBACK_PATH.to_owned(),
            storage: StorageKeys::default(),
            auto_hide: AutoHide::default(),
        }
    }
}

impl AppConfig {
    /// Defaults plus any compile-time overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("FINBOARD_API_BASE") {
            config.api_base = normalize_base(base);
        }
        config
    }

    /// Parse a (possibly partial) JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not valid JSON of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = normalize_base(&config.api_base);
        Ok(config)
    }

    /// Absolute or same-origin URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// `localStorage` keys holding the persisted session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub token: String,
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { token: DEFAULT_TOKEN_KEY.to_owned(), user: DEFAULT_USER_KEY.to_owned() }
    }
}

/// Banner auto-hide delays in milliseconds, per severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutoHide {
    pub error_ms: u32,
    pub warning_ms: u32,
    pub info_ms: u32,
    pub success_ms: u32,
}

impl Default for AutoHide {
    fn default() -> Self {
        Self { error_ms: 6000, warning_ms: 5000, info_ms: 3000, success_ms: 3000 }
    }
}

impl AutoHide {
    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Error => self.error_ms,
            Severity::Warning => self.warning_ms,
            Severity::Info => self.info_ms,
            Severity::Success => self.success_ms,
        }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
