use serde::{Deserialize, Serialize};
use std::{env, ffi::OsString};

pub const WORKSPACE_ID_VAR: &str = "LOG_ANALYTICS_WORKSPACE_ID";
pub const SHARED_KEY_VAR: &str = "LOG_ANALYTICS_SHARED_KEY";

pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Credentials for the Log Analytics workspace. Neither value is required or
/// validated; an unset variable stays `None`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LogAnalyticsConfig {
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub shared_key: Option<String>,
}

impl std::fmt::Debug for LogAnalyticsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogAnalyticsConfig")
            .field("workspace_id", &self.workspace_id)
            .field("shared_key", &self.shared_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartbeatConfig {
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_analytics: LogAnalyticsConfig,
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_os_lookup(|name| env::var_os(name))
    }

    /// Like [`Config::from_lookup`], but over raw OS strings. Values that are
    /// not valid UTF-8 are converted lossily instead of failing.
    pub fn from_os_lookup<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::from_lookup(|name| lookup(name).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Builds the configuration from an arbitrary variable lookup. Present
    /// values are taken verbatim, including the empty string.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = config::Config::builder()
            .set_default("heartbeat.interval_secs", DEFAULT_INTERVAL_SECS)?;

        if let Some(workspace_id) = lookup(WORKSPACE_ID_VAR) {
            cfg = cfg.set_override("log_analytics.workspace_id", workspace_id)?;
        }

        if let Some(shared_key) = lookup(SHARED_KEY_VAR) {
            cfg = cfg.set_override("log_analytics.shared_key", shared_key)?;
        }

        cfg.build()?.try_deserialize()
    }
}
