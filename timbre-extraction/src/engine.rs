//! FeatureExtractor: tagger first, heuristic fallback.

use timbre_core::models::Extraction;
use timbre_core::traits::{IPosTagger, NoOpTagger};
use tracing::{debug, warn};

use crate::heuristic::extract_heuristic;
use crate::tagged::extract_from_tagged;

/// Which path produced an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPath {
    Tagged,
    Heuristic,
}

/// An extraction plus the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub extraction: Extraction,
    pub path: ExtractionPath,
}

/// Turns utterance text into a template and lexicon.
///
/// Never fails: a tagger error, an empty tagging, or records with no usable
/// token all route to the heuristic.
pub struct FeatureExtractor<T = NoOpTagger> {
    tagger: T,
}

impl FeatureExtractor<NoOpTagger> {
    /// Heuristic-only extractor.
    pub fn heuristic() -> Self {
        Self { tagger: NoOpTagger }
    }
}

impl Default for FeatureExtractor<NoOpTagger> {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl<T: IPosTagger> FeatureExtractor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Extract a template and lexicon from `text`.
    pub async fn extract(&self, text: &str) -> ExtractionOutcome {
        match self.tagger.tag(text).await {
            Ok(tokens) if !tokens.is_empty() => {
                if let Some(extraction) = extract_from_tagged(&tokens) {
                    debug!(tokens = tokens.len(), "extracted from tagger output");
                    return ExtractionOutcome {
                        extraction,
                        path: ExtractionPath::Tagged,
                    };
                }
                debug!("tagger returned no usable tokens, using heuristic");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "tagger failed, using heuristic");
            }
        }

        ExtractionOutcome {
            extraction: extract_heuristic(text),
            path: ExtractionPath::Heuristic,
        }
    }
}
