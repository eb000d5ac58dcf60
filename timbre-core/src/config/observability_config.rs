use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Env var whose filter directive overrides `log_level`.
    pub log_env: String,
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_output: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_env: defaults::DEFAULT_LOG_ENV.to_string(),
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_output: defaults::DEFAULT_JSON_OUTPUT,
        }
    }
}
