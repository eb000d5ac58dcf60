use serde::{Deserialize, Serialize};
use timbre_core::config::MergerConfig;
use timbre_core::models::BucketSet;

/// Exported merger state: the three buckets plus the maturity thresholds in
/// effect when exported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergerSnapshot {
    pub buckets: BucketSet,
    pub cfg: SnapshotCfg,
}

/// Informational only; importing a snapshot does not apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotCfg {
    pub min_templates_per_stance: usize,
    pub min_lexicon_per_pos: usize,
}

impl From<&MergerConfig> for SnapshotCfg {
    fn from(config: &MergerConfig) -> Self {
        Self {
            min_templates_per_stance: config.min_templates_per_stance,
            min_lexicon_per_pos: config.min_lexicon_per_pos,
        }
    }
}

impl Default for SnapshotCfg {
    fn default() -> Self {
        Self::from(&MergerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_camel_case() {
        let value = serde_json::to_value(MergerSnapshot::default()).unwrap();
        assert_eq!(value["cfg"]["minTemplatesPerStance"], 4);
        assert_eq!(value["cfg"]["minLexiconPerPos"], 6);
        assert!(value["buckets"]["neutral"]["lexicon"]["modals"].is_array());
    }
}
