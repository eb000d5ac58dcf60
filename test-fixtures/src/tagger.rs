use std::collections::HashMap;

use timbre_core::errors::TaggerError;
use timbre_core::models::TaggedToken;
use timbre_core::traits::IPosTagger;
use timbre_core::TimbreResult;

/// Answers with pre-recorded token lists keyed by exact text. Unscripted
/// text gets an empty tagging.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTagger {
    scripts: HashMap<String, Vec<TaggedToken>>,
}

impl ScriptedTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, text: &str, tokens: Vec<TaggedToken>) -> Self {
        self.scripts.insert(text.to_string(), tokens);
        self
    }
}

impl IPosTagger for ScriptedTagger {
    async fn tag(&self, text: &str) -> TimbreResult<Vec<TaggedToken>> {
        Ok(self.scripts.get(text).cloned().unwrap_or_default())
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTagger;

impl IPosTagger for FailingTagger {
    async fn tag(&self, _text: &str) -> TimbreResult<Vec<TaggedToken>> {
        Err(TaggerError::Unavailable {
            reason: "tagger offline".to_string(),
        }
        .into())
    }
}
