//! Read-only views of bucket state for debugging and inspection.

use serde::{Deserialize, Serialize};
use timbre_composition::LearnedContent;
use timbre_core::constants::{DEBUG_LEXICON_SAMPLE_SIZE, DEBUG_TEMPLATE_SAMPLE_SIZE};
use timbre_core::models::Bucket;
use timbre_core::{Lexicon, LexiconCounts, StanceBand};

/// Size of a bucket and what it has learned beyond the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexDetails {
    pub stance: StanceBand,
    pub total_templates: usize,
    pub total_lexicon: LexiconCounts,
    pub learned_templates: Vec<String>,
    pub learned_lexicon: Lexicon,
}

impl LexDetails {
    pub fn from_bucket(
        stance: StanceBand,
        bucket: &Bucket,
        base_templates: &[String],
        base_lexicon: &Lexicon,
    ) -> Self {
        let learned = LearnedContent::isolate(bucket, base_templates, base_lexicon);
        Self {
            stance,
            total_templates: bucket.templates.len(),
            total_lexicon: bucket.lexicon.counts(),
            learned_templates: learned.templates,
            learned_lexicon: learned.lexicon,
        }
    }
}

/// The most recent templates and the first few tokens of each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugBucket {
    pub stance: StanceBand,
    pub templates: Vec<String>,
    pub lexicon_sample: Lexicon,
}

impl DebugBucket {
    pub fn from_bucket(stance: StanceBand, bucket: &Bucket) -> Self {
        let skip = bucket
            .templates
            .len()
            .saturating_sub(DEBUG_TEMPLATE_SAMPLE_SIZE);
        Self {
            stance,
            templates: bucket.templates[skip..].to_vec(),
            lexicon_sample: Lexicon::from_fn(|category| {
                bucket
                    .lexicon
                    .get(category)
                    .iter()
                    .take(DEBUG_LEXICON_SAMPLE_SIZE)
                    .cloned()
                    .collect()
            }),
        }
    }
}
