use serde::{Deserialize, Serialize};

use super::defaults;

/// How a credential is picked from the pool for each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSelection {
    #[default]
    Random,
    RoundRobin,
}

/// Chat-completion collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Env var holding the JSON credential list.
    pub credentials_env: String,
    /// Model used by credentials that do not name one.
    pub default_model: Option<String>,
    /// Base URL used by credentials that do not name one.
    pub default_base_url: String,
    pub timeout_secs: u64,
    /// Extra attempts after a failed request. Zero disables retry.
    pub max_retries: u32,
    /// Backoff before the first retry; doubles each attempt.
    pub initial_backoff_ms: u64,
    pub stance_max_tokens: u32,
    pub pos_max_tokens: u32,
    pub selection: CredentialSelection,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            credentials_env: defaults::DEFAULT_CREDENTIALS_ENV.to_string(),
            default_model: None,
            default_base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_LLM_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_LLM_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_LLM_INITIAL_BACKOFF_MS,
            stance_max_tokens: defaults::DEFAULT_STANCE_MAX_TOKENS,
            pos_max_tokens: defaults::DEFAULT_POS_MAX_TOKENS,
            selection: CredentialSelection::default(),
        }
    }
}
