//! Persona overrides folded into the base style.
//!
//! Both override kinds come in two shapes: a single flat source, or a map of
//! named sources. Named sources are applied in document order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use timbre_core::lexicon::tokens_from_value;
use timbre_core::{Lexicon, PosCategory};

/// Lexicon override: one per-category object, or several named ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconOverride {
    Flat(Lexicon),
    Named(Vec<(String, Lexicon)>),
}

impl LexiconOverride {
    /// An object where any category key holds an array is flat; any other
    /// object is a map of named sources (non-object entries ignored).
    /// Non-objects are not an override.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let flat = PosCategory::ALL
            .iter()
            .any(|c| map.get(c.key()).is_some_and(Value::is_array));
        if flat {
            return Some(Self::Flat(Lexicon::from_value(value)));
        }
        let named = map
            .iter()
            .filter(|(_, v)| v.is_object())
            .map(|(name, v)| (name.clone(), Lexicon::from_value(v)))
            .collect();
        Some(Self::Named(named))
    }

    fn sources(&self) -> Vec<&Lexicon> {
        match self {
            Self::Flat(lexicon) => vec![lexicon],
            Self::Named(named) => named.iter().map(|(_, l)| l).collect(),
        }
    }
}

/// Templates a persona uses when speaking itself and when addressed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxSource {
    #[serde(rename = "self")]
    pub own: Vec<String>,
    #[serde(rename = "otherSpeaker")]
    pub other_speaker: Vec<String>,
}

impl SyntaxSource {
    fn from_map(map: &Map<String, Value>) -> Self {
        let list = |key: &str| map.get(key).map(tokens_from_value).unwrap_or_default();
        Self {
            own: list("self"),
            other_speaker: list("otherSpeaker"),
        }
    }

    fn templates(&self) -> impl Iterator<Item = &String> {
        self.own.iter().chain(&self.other_speaker)
    }
}

/// Template override: one `{self, otherSpeaker}` source, or named ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxOverride {
    Flat(SyntaxSource),
    Named(Vec<(String, SyntaxSource)>),
}

impl SyntaxOverride {
    /// Flat when `self` or `otherSpeaker` is present (and not null).
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let present = |key: &str| map.get(key).is_some_and(|v| !v.is_null());
        if present("self") || present("otherSpeaker") {
            return Some(Self::Flat(SyntaxSource::from_map(map)));
        }
        let named = map
            .iter()
            .filter_map(|(name, v)| Some((name.clone(), SyntaxSource::from_map(v.as_object()?))))
            .collect();
        Some(Self::Named(named))
    }

    fn sources(&self) -> Vec<&SyntaxSource> {
        match self {
            Self::Flat(source) => vec![source],
            Self::Named(named) => named.iter().map(|(_, s)| s).collect(),
        }
    }
}

/// A persona bundle: `{ lexicon?, syntax? }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Persona {
    pub lexicon: Option<LexiconOverride>,
    pub syntax: Option<SyntaxOverride>,
}

impl Persona {
    pub fn from_value(value: &Value) -> Self {
        Self {
            lexicon: value.get("lexicon").and_then(LexiconOverride::from_value),
            syntax: value.get("syntax").and_then(SyntaxOverride::from_value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_none() && self.syntax.is_none()
    }
}

/// Union every lexicon source into `base`, per category: base order first,
/// then new tokens in source order. Empty tokens are skipped.
pub fn merge_lexicon(base: &Lexicon, overrides: Option<&LexiconOverride>) -> Lexicon {
    let mut merged = base.clone();
    let Some(overrides) = overrides else {
        return merged;
    };
    for source in overrides.sources() {
        for (category, tokens) in source.iter() {
            for token in tokens.iter().filter(|t| !t.is_empty()) {
                merged.push_unique(category, token);
            }
        }
    }
    merged
}

/// Persona templates (deduped, `self` before `otherSpeaker`, source order)
/// followed by the base templates not already included. With no persona
/// templates the base is returned unchanged.
pub fn merge_templates(base: &[String], overrides: Option<&SyntaxOverride>) -> Vec<String> {
    let mut persona: Vec<String> = Vec::new();
    if let Some(overrides) = overrides {
        for source in overrides.sources() {
            for template in source.templates().filter(|t| !t.is_empty()) {
                if !persona.contains(template) {
                    persona.push(template.clone());
                }
            }
        }
    }
    if persona.is_empty() {
        return base.to_vec();
    }
    for template in base {
        if !persona.contains(template) {
            persona.push(template.clone());
        }
    }
    persona
}
