//! Chat-completion HTTP client with retry and exponential backoff.

use std::time::Duration;

use serde_json::{json, Value};
use timbre_core::config::LlmConfig;
use timbre_core::errors::LlmError;
use timbre_core::TimbreResult;
use tracing::{debug, warn};

use crate::credentials::Credential;

/// One system + user exchange.
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    /// Ask for a JSON object response where the endpoint supports it.
    pub json: bool,
}

/// Thin async client over an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    http: reqwest::Client,
    default_base_url: String,
    max_retries: u32,
    initial_backoff: Duration,
}

impl ChatCompletionClient {
    pub fn new(config: &LlmConfig) -> TimbreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| LlmError::Http {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            default_base_url: config.default_base_url.clone(),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
        })
    }

    /// Send `request` with `credential` and return the trimmed message text.
    pub async fn complete(
        &self,
        credential: &Credential,
        request: &ChatRequest<'_>,
    ) -> TimbreResult<String> {
        let model = credential.model.as_deref().ok_or(LlmError::NoModel)?;
        let root = credential
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.default_base_url.as_str());
        let url = completions_url(root);
        let payload = build_payload(model, request, wants_json_format(root, request.json));

        let mut backoff = self.initial_backoff;
        let mut attempt = 0;
        loop {
            match self.send(&url, &credential.api_key, &payload).await {
                Ok(body) => return Ok(extract_content(&body)),
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    warn!(attempt, error = %e, "chat completion failed, retrying");
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn send(&self, url: &str, api_key: &str, payload: &Value) -> Result<Value, LlmError> {
        debug!(url, "sending chat completion");
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| LlmError::Http {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LlmError::MalformedResponse {
                reason: e.to_string(),
            })
    }
}

/// Transport failures, rate limiting and server errors are worth another
/// attempt; other client errors are not.
fn is_retryable(error: &LlmError) -> bool {
    match error {
        LlmError::Http { .. } => true,
        LlmError::Status { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

/// `<root without trailing slashes>/chat/completions`.
pub fn completions_url(root: &str) -> String {
    format!("{}/chat/completions", root.trim_end_matches('/'))
}

/// JSON response format is only requested from openai.com hosts.
pub fn wants_json_format(root: &str, json: bool) -> bool {
    json && root.to_ascii_lowercase().contains("openai.com")
}

pub fn build_payload(model: &str, request: &ChatRequest<'_>, json_format: bool) -> Value {
    let mut payload = json!({
        "model": model,
        "messages": [
            { "role": "system", "content": request.system },
            { "role": "user", "content": request.user },
        ],
        "max_completion_tokens": request.max_tokens,
        "stream": false,
    });
    if json_format {
        payload["response_format"] = json!({ "type": "json_object" });
    }
    payload
}

/// Text of `choices[0].message.content`, or empty when absent.
pub fn extract_content(body: &Value) -> String {
    body.pointer("/choices/0/message/content")
        .map(content_text)
        .unwrap_or_default()
}

/// Flatten a message `content` value. Strings are used as is; arrays
/// concatenate their string parts, `{text}` parts and `{text: {value}}`
/// parts; objects read `text` or `text.value`. Anything else is empty.
pub fn content_text(content: &Value) -> String {
    let text = match content {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts.iter().filter_map(part_text).collect(),
        Value::Object(_) => part_text(content).unwrap_or_default(),
        _ => String::new(),
    };
    text.trim().to_string()
}

fn part_text(part: &Value) -> Option<String> {
    match part {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("text")? {
            Value::String(s) => Some(s.clone()),
            nested => nested.get("value")?.as_str().map(str::to_string),
        },
        _ => None,
    }
}
