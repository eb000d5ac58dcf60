use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lexicon::{lenient_tokens, Lexicon};
use crate::stance::StanceBand;

/// Per-stance accumulator of templates and lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    #[serde(deserialize_with = "lenient_tokens")]
    pub templates: Vec<String>,
    #[serde(deserialize_with = "lenient_lexicon")]
    pub lexicon: Lexicon,
}

impl Bucket {
    /// A bucket seeded with a copy of the given base style.
    pub fn seeded(templates: &[String], lexicon: &Lexicon) -> Self {
        Self {
            templates: templates.to_vec(),
            lexicon: lexicon.clone(),
        }
    }

    /// Whether the bucket holds enough material to be trusted over fallback
    /// content: at least `min_templates` templates and at least
    /// `min_lexicon_per_pos` tokens in every category.
    pub fn is_mature(&self, min_templates: usize, min_lexicon_per_pos: usize) -> bool {
        self.templates.len() >= min_templates
            && self
                .lexicon
                .iter()
                .all(|(_, tokens)| tokens.len() >= min_lexicon_per_pos)
    }
}

/// All three buckets, keyed by stance band. This is also the `buckets` block
/// of an exported snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketSet {
    #[serde(deserialize_with = "lenient_bucket")]
    pub defensive: Bucket,
    #[serde(deserialize_with = "lenient_bucket")]
    pub neutral: Bucket,
    #[serde(deserialize_with = "lenient_bucket")]
    pub supportive: Bucket,
}

impl BucketSet {
    pub fn seeded(templates: &[String], lexicon: &Lexicon) -> Self {
        Self {
            defensive: Bucket::seeded(templates, lexicon),
            neutral: Bucket::seeded(templates, lexicon),
            supportive: Bucket::seeded(templates, lexicon),
        }
    }

    pub fn get(&self, band: StanceBand) -> &Bucket {
        match band {
            StanceBand::Defensive => &self.defensive,
            StanceBand::Neutral => &self.neutral,
            StanceBand::Supportive => &self.supportive,
        }
    }

    pub fn get_mut(&mut self, band: StanceBand) -> &mut Bucket {
        match band {
            StanceBand::Defensive => &mut self.defensive,
            StanceBand::Neutral => &mut self.neutral,
            StanceBand::Supportive => &mut self.supportive,
        }
    }
}

fn lenient_lexicon<'de, D>(deserializer: D) -> Result<Lexicon, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Lexicon::from_value(&value))
}

/// Non-object buckets (null, arrays, scalars) become empty buckets.
fn lenient_bucket<'de, D>(deserializer: D) -> Result<Bucket, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => Bucket::deserialize(value).map_err(serde::de::Error::custom),
        _ => Ok(Bucket::default()),
    }
}
