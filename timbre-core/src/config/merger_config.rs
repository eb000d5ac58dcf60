use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning and composition tuning for one merger instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerConfig {
    /// Templates a bucket needs before it counts as mature.
    pub min_templates_per_stance: usize,
    /// Tokens every lexicon category needs before a bucket counts as mature.
    pub min_lexicon_per_pos: usize,
    /// Fraction of base templates kept once learned templates exist.
    pub base_template_retention: f64,
    /// Fraction of each base lexicon category kept once learned tokens exist.
    pub base_lexicon_retention: f64,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            min_templates_per_stance: defaults::DEFAULT_MIN_TEMPLATES_PER_STANCE,
            min_lexicon_per_pos: defaults::DEFAULT_MIN_LEXICON_PER_POS,
            base_template_retention: defaults::DEFAULT_BASE_TEMPLATE_RETENTION,
            base_lexicon_retention: defaults::DEFAULT_BASE_LEXICON_RETENTION,
        }
    }
}
