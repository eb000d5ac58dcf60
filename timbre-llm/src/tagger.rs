//! Completion-backed part-of-speech tagger.

use std::sync::Arc;

use serde_json::Value;
use timbre_core::errors::TaggerError;
use timbre_core::models::TaggedToken;
use timbre_core::traits::IPosTagger;
use timbre_core::TimbreResult;
use tracing::debug;

use crate::backend::LlmBackend;
use crate::client::ChatRequest;
use crate::prompts::POS_PROMPT;

/// Asks the model for `{ "tokens": [...] }`. Without credentials it returns
/// an empty tagging, which sends extraction down the heuristic path.
#[derive(Debug, Clone)]
pub struct LlmPosTagger {
    backend: Arc<LlmBackend>,
}

impl LlmPosTagger {
    pub fn new(backend: Arc<LlmBackend>) -> Self {
        Self { backend }
    }
}

impl IPosTagger for LlmPosTagger {
    async fn tag(&self, text: &str) -> TimbreResult<Vec<TaggedToken>> {
        if !self.backend.has_credentials() {
            debug!("no credentials, skipping LLM tagging");
            return Ok(Vec::new());
        }
        let request = ChatRequest {
            system: POS_PROMPT,
            user: text,
            max_tokens: self.backend.pos_max_tokens(),
            json: true,
        };
        let raw = self.backend.complete(&request).await?;
        parse_tagged_tokens(&raw)
    }
}

/// Pull the JSON object out of a completion: drop a leading code fence line
/// (and a closing fence), then keep the span from the first `{` to the last
/// `}` when there is one.
pub fn extract_json_object(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    if s.starts_with("```") {
        let mut lines: Vec<&str> = s.split('\n').skip(1).collect();
        if lines
            .last()
            .is_some_and(|line| line.trim().starts_with("```"))
        {
            lines.pop();
        }
        s = lines.join("\n").trim().to_string();
    }
    match (s.find('{'), s.rfind('}')) {
        (Some(first), Some(last)) if last > first => s[first..=last].trim().to_string(),
        _ => s,
    }
}

/// Parse tagger output. Empty output and a non-array `tokens` field yield no
/// tokens; unparseable JSON is an error; entries without a string `token`
/// are skipped.
pub fn parse_tagged_tokens(raw: &str) -> TimbreResult<Vec<TaggedToken>> {
    let cleaned = extract_json_object(raw);
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Value = serde_json::from_str(&cleaned).map_err(|e| TaggerError::InvalidResponse {
        reason: e.to_string(),
    })?;
    let Some(entries) = parsed.get("tokens").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };
    Ok(entries.iter().filter_map(token_from_value).collect())
}

fn token_from_value(entry: &Value) -> Option<TaggedToken> {
    let token = entry.get("token")?.as_str()?;
    let field = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
    Some(TaggedToken {
        token: token.to_string(),
        pos: field("pos").unwrap_or_default(),
        verb_form: field("verbForm"),
        lemma: field("lemma"),
    })
}
