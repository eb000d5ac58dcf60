pub mod defaults;
mod llm_config;
mod merger_config;
mod observability_config;

pub use llm_config::{CredentialSelection, LlmConfig};
pub use merger_config::MergerConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TimbreError, TimbreResult};
use crate::models::TasteConfig;

/// Complete configuration, loadable from TOML. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimbreConfig {
    pub merger: MergerConfig,
    pub taste: TasteConfig,
    pub llm: LlmConfig,
    pub observability: ObservabilityConfig,
}

impl TimbreConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(raw: &str) -> TimbreResult<Self> {
        toml::from_str(raw).map_err(|e| TimbreError::ConfigError(e.to_string()))
    }

    pub fn to_toml(&self) -> TimbreResult<String> {
        toml::to_string(self).map_err(|e| TimbreError::ConfigError(e.to_string()))
    }
}
