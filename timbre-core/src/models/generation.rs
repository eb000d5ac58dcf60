use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::stance::StanceBand;

/// Generation-ready style for one stance band. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub stance: StanceBand,
    pub templates: Vec<String>,
    pub lexicon: Lexicon,
}

/// Caller-supplied content that replaces the base style as the composition
/// floor. Empty `templates` and `None` lexicon defer to the base style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationFallback {
    pub templates: Vec<String>,
    pub lexicon: Option<Lexicon>,
}
