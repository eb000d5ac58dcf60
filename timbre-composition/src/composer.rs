//! Composer: bucket + base (or caller fallback) → generation config.

use timbre_core::config::MergerConfig;
use timbre_core::models::{Bucket, GenerationConfig, GenerationFallback};
use timbre_core::{Lexicon, StanceBand};
use tracing::debug;

use crate::boost::boost_learned;
use crate::learned::LearnedContent;
use crate::retention::{merge_with_retention, RetentionPolicy};

/// Blends learned content with a floor style under a retention policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composer {
    policy: RetentionPolicy,
}

impl Composer {
    pub fn new(template_retention: f64, lexicon_retention: f64) -> Self {
        Self {
            policy: RetentionPolicy::new(template_retention, lexicon_retention),
        }
    }

    pub fn from_config(config: &MergerConfig) -> Self {
        Self {
            policy: RetentionPolicy::from_config(config),
        }
    }

    /// Compose the generation style for `stance`.
    ///
    /// Learned content is always isolated against the base style. The floor
    /// it is blended with is the fallback's templates when non-empty and its
    /// lexicon when present, otherwise the base.
    pub fn compose(
        &self,
        stance: StanceBand,
        bucket: &Bucket,
        base_templates: &[String],
        base_lexicon: &Lexicon,
        fallback: Option<&GenerationFallback>,
    ) -> GenerationConfig {
        let learned = LearnedContent::isolate(bucket, base_templates, base_lexicon);

        let floor_templates = fallback
            .map(|f| f.templates.as_slice())
            .filter(|t| !t.is_empty())
            .unwrap_or(base_templates);
        let floor_lexicon = fallback
            .and_then(|f| f.lexicon.as_ref())
            .unwrap_or(base_lexicon);

        let templates =
            merge_with_retention(&learned.templates, floor_templates, self.policy.template());

        let merged = Lexicon::from_fn(|category| {
            merge_with_retention(
                learned.lexicon.get(category),
                floor_lexicon.get(category),
                self.policy.lexicon(),
            )
        });
        let lexicon = boost_learned(&merged, &learned.lexicon);

        debug!(
            stance = %stance,
            learned_templates = learned.templates.len(),
            learned_tokens = learned.lexicon.total_len(),
            templates = templates.len(),
            "generation config composed"
        );

        GenerationConfig {
            stance,
            templates,
            lexicon,
        }
    }
}
