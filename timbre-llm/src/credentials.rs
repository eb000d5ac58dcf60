//! Credential pool parsed from a JSON array.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use timbre_core::config::LlmConfig;
use timbre_core::TimbreResult;
use tracing::{debug, warn};

/// One API credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Usable credentials in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
}

impl CredentialPool {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// Parse a JSON array of `{apiKey, model?, baseURL?}`. Entries without a
    /// non-empty `apiKey` are dropped; a missing model takes `default_model`.
    /// Any non-array document yields an empty pool.
    pub fn from_json(raw: &str, default_model: Option<&str>) -> TimbreResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Array(entries) = value else {
            return Ok(Self::default());
        };

        let credentials = entries
            .iter()
            .filter_map(|entry| {
                let api_key = non_empty_str(entry.get("apiKey"))?;
                let model = non_empty_str(entry.get("model"))
                    .or(default_model)
                    .map(str::to_string);
                let base_url = non_empty_str(entry.get("baseURL")).map(str::to_string);
                Some(Credential {
                    api_key: api_key.to_string(),
                    model,
                    base_url,
                })
            })
            .collect();
        Ok(Self { credentials })
    }

    /// Load from the env var named in `config`. An unset variable gives an
    /// empty pool; malformed JSON is logged and also gives an empty pool.
    pub fn from_env(config: &LlmConfig) -> Self {
        let Ok(raw) = std::env::var(&config.credentials_env) else {
            debug!(env = %config.credentials_env, "no LLM credentials configured");
            return Self::default();
        };
        match Self::from_json(&raw, config.default_model.as_deref()) {
            Ok(pool) => pool,
            Err(e) => {
                warn!(env = %config.credentials_env, error = %e, "failed to parse LLM credentials");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.credentials.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_without_key_are_dropped() {
        let raw = r#"[
            {"apiKey": "k1", "model": "m1", "baseURL": "https://example.test/v1/"},
            {"model": "orphan"},
            {"apiKey": ""},
            {"apiKey": "k2"},
            "garbage"
        ]"#;
        let pool = CredentialPool::from_json(raw, Some("fallback-model")).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).unwrap().model.as_deref(), Some("m1"));
        assert_eq!(
            pool.get(0).unwrap().base_url.as_deref(),
            Some("https://example.test/v1/")
        );
        assert_eq!(pool.get(1).unwrap().model.as_deref(), Some("fallback-model"));
        assert_eq!(pool.get(1).unwrap().base_url, None);
    }

    #[test]
    fn non_array_is_empty_and_bad_json_errors() {
        assert!(CredentialPool::from_json(r#"{"apiKey":"k"}"#, None)
            .unwrap()
            .is_empty());
        assert!(CredentialPool::from_json("[]", None).unwrap().is_empty());
        assert!(CredentialPool::from_json("not json", None).is_err());
    }

    #[test]
    fn unset_env_gives_empty_pool() {
        let config = LlmConfig {
            credentials_env: "TIMBRE_TEST_CREDENTIALS_THAT_ARE_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(CredentialPool::from_env(&config).is_empty());
    }
}
