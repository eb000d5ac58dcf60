use crate::errors::TimbreResult;
use crate::models::TaggedToken;

/// Part-of-speech tagging of one utterance.
///
/// An empty result is a valid answer meaning "no tagging available"; the
/// extractor then falls back to its heuristic path.
#[allow(async_fn_in_trait)]
pub trait IPosTagger: Send + Sync {
    async fn tag(&self, text: &str) -> TimbreResult<Vec<TaggedToken>>;
}

/// Tagger used when none is configured. Always returns no tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTagger;

impl IPosTagger for NoOpTagger {
    async fn tag(&self, _text: &str) -> TimbreResult<Vec<TaggedToken>> {
        Ok(Vec::new())
    }
}
