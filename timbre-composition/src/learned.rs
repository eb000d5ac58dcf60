//! Learned content = bucket content the base style does not already hold.

use serde::{Deserialize, Serialize};
use timbre_core::models::Bucket;
use timbre_core::Lexicon;

/// Templates and tokens a bucket has learned beyond its base.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnedContent {
    pub templates: Vec<String>,
    pub lexicon: Lexicon,
}

impl LearnedContent {
    /// Keep bucket entries absent from the base (exact match), in bucket
    /// order. Each lexicon category is compared only against the same
    /// category of the base.
    pub fn isolate(bucket: &Bucket, base_templates: &[String], base_lexicon: &Lexicon) -> Self {
        let templates = bucket
            .templates
            .iter()
            .filter(|t| !base_templates.contains(t))
            .cloned()
            .collect();

        let lexicon = Lexicon::from_fn(|category| {
            let base = base_lexicon.get(category);
            bucket
                .lexicon
                .get(category)
                .iter()
                .filter(|token| !base.contains(token))
                .cloned()
                .collect()
        });

        Self { templates, lexicon }
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.lexicon.is_empty()
    }
}
