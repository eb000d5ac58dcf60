use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TEMPLATES;
use crate::lexicon::Lexicon;

/// The user-authored base style: the stylistic floor that learning is
/// blended against. Changed only by explicit overrides, never by learning.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteConfig {
    pub templates: Vec<String>,
    pub lexicon: Lexicon,
}

impl TasteConfig {
    pub fn new(templates: Vec<String>, lexicon: Lexicon) -> Self {
        Self { templates, lexicon }
    }

    /// Templates in effect: the configured list, or the built-in defaults
    /// when none are configured.
    pub fn effective_templates(&self) -> Vec<String> {
        if self.templates.is_empty() {
            DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect()
        } else {
            self.templates.clone()
        }
    }

    /// Lexicon in effect: the configured lexicon, or the built-in default
    /// when every category is empty.
    pub fn effective_lexicon(&self) -> Lexicon {
        if self.lexicon.is_empty() {
            Lexicon::builtin_default()
        } else {
            self.lexicon.clone()
        }
    }
}
