//! Per-part-of-speech word lists.
//!
//! A [`Lexicon`] always carries all ten categories. Lists keep insertion
//! order; deduplication is the caller's choice (`push` vs `push_unique`),
//! because extraction output may repeat a token that bucket storage later
//! folds away.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants;
use crate::template::TemplateSlot;

/// The ten fixed lexicon categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Nouns,
    Verbs,
    Adjectives,
    Adverbs,
    Conjunctions,
    Pronouns,
    Articles,
    Prepositions,
    Auxiliaries,
    Modals,
}

impl PosCategory {
    pub const ALL: [PosCategory; 10] = [
        PosCategory::Nouns,
        PosCategory::Verbs,
        PosCategory::Adjectives,
        PosCategory::Adverbs,
        PosCategory::Conjunctions,
        PosCategory::Pronouns,
        PosCategory::Articles,
        PosCategory::Prepositions,
        PosCategory::Auxiliaries,
        PosCategory::Modals,
    ];

    /// Serialized key of this category.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Nouns => "nouns",
            Self::Verbs => "verbs",
            Self::Adjectives => "adjectives",
            Self::Adverbs => "adverbs",
            Self::Conjunctions => "conjunctions",
            Self::Pronouns => "pronouns",
            Self::Articles => "articles",
            Self::Prepositions => "prepositions",
            Self::Auxiliaries => "auxiliaries",
            Self::Modals => "modals",
        }
    }

    /// Template slot written for a non-verb token of this category.
    /// Verbs pick their slot from the verb form instead.
    pub fn slot(&self) -> TemplateSlot {
        match self {
            Self::Nouns => TemplateSlot::Noun,
            Self::Verbs => TemplateSlot::Verb,
            Self::Adjectives => TemplateSlot::Adjective,
            Self::Adverbs => TemplateSlot::Adverb,
            Self::Conjunctions => TemplateSlot::Conjunction,
            Self::Pronouns => TemplateSlot::Pronoun,
            Self::Articles => TemplateSlot::Article,
            Self::Prepositions => TemplateSlot::Preposition,
            Self::Auxiliaries => TemplateSlot::Aux,
            Self::Modals => TemplateSlot::Modal,
        }
    }
}

/// Mapping from every [`PosCategory`] to an ordered token list.
///
/// Deserialization is lenient: missing categories, non-array values and
/// non-string entries all collapse to empty / skipped, so loosely shaped
/// payloads are normalized at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    #[serde(deserialize_with = "lenient_tokens")]
    pub nouns: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub verbs: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub adjectives: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub adverbs: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub conjunctions: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub pronouns: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub articles: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub prepositions: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub auxiliaries: Vec<String>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub modals: Vec<String>,
}

impl Lexicon {
    /// The built-in lexicon used when the taste config has none.
    pub fn builtin_default() -> Self {
        Self::default()
            .with(PosCategory::Adjectives, constants::DEFAULT_ADJECTIVES)
            .with(PosCategory::Nouns, constants::DEFAULT_NOUNS)
            .with(PosCategory::Verbs, constants::DEFAULT_VERBS)
            .with(PosCategory::Adverbs, constants::DEFAULT_ADVERBS)
            .with(PosCategory::Conjunctions, constants::DEFAULT_CONJUNCTIONS)
    }

    /// Builder: append `tokens` to `category` (no dedup).
    pub fn with(mut self, category: PosCategory, tokens: &[&str]) -> Self {
        self.get_mut(category)
            .extend(tokens.iter().map(|t| t.to_string()));
        self
    }

    /// Lenient conversion from an arbitrary JSON value. Non-objects yield an
    /// empty lexicon.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn get(&self, category: PosCategory) -> &Vec<String> {
        match category {
            PosCategory::Nouns => &self.nouns,
            PosCategory::Verbs => &self.verbs,
            PosCategory::Adjectives => &self.adjectives,
            PosCategory::Adverbs => &self.adverbs,
            PosCategory::Conjunctions => &self.conjunctions,
            PosCategory::Pronouns => &self.pronouns,
            PosCategory::Articles => &self.articles,
            PosCategory::Prepositions => &self.prepositions,
            PosCategory::Auxiliaries => &self.auxiliaries,
            PosCategory::Modals => &self.modals,
        }
    }

    pub fn get_mut(&mut self, category: PosCategory) -> &mut Vec<String> {
        match category {
            PosCategory::Nouns => &mut self.nouns,
            PosCategory::Verbs => &mut self.verbs,
            PosCategory::Adjectives => &mut self.adjectives,
            PosCategory::Adverbs => &mut self.adverbs,
            PosCategory::Conjunctions => &mut self.conjunctions,
            PosCategory::Pronouns => &mut self.pronouns,
            PosCategory::Articles => &mut self.articles,
            PosCategory::Prepositions => &mut self.prepositions,
            PosCategory::Auxiliaries => &mut self.auxiliaries,
            PosCategory::Modals => &mut self.modals,
        }
    }

    /// Iterate categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PosCategory, &[String])> + '_ {
        PosCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category).as_slice()))
    }

    /// Append a token, allowing duplicates.
    pub fn push(&mut self, category: PosCategory, token: impl Into<String>) {
        self.get_mut(category).push(token.into());
    }

    /// Append a token only if the category does not already hold it.
    /// Returns whether the token was added.
    pub fn push_unique(&mut self, category: PosCategory, token: &str) -> bool {
        let list = self.get_mut(category);
        if list.iter().any(|t| t == token) {
            return false;
        }
        list.push(token.to_string());
        true
    }

    pub fn contains(&self, category: PosCategory, token: &str) -> bool {
        self.get(category).iter().any(|t| t == token)
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, tokens)| tokens.is_empty())
    }

    /// Total number of tokens across all categories.
    pub fn total_len(&self) -> usize {
        self.iter().map(|(_, tokens)| tokens.len()).sum()
    }

    pub fn counts(&self) -> LexiconCounts {
        LexiconCounts {
            nouns: self.nouns.len(),
            verbs: self.verbs.len(),
            adjectives: self.adjectives.len(),
            adverbs: self.adverbs.len(),
            conjunctions: self.conjunctions.len(),
            pronouns: self.pronouns.len(),
            articles: self.articles.len(),
            prepositions: self.prepositions.len(),
            auxiliaries: self.auxiliaries.len(),
            modals: self.modals.len(),
        }
    }

    /// Build a lexicon by applying `f` to every category.
    pub fn from_fn(mut f: impl FnMut(PosCategory) -> Vec<String>) -> Self {
        let mut out = Self::default();
        for category in PosCategory::ALL {
            *out.get_mut(category) = f(category);
        }
        out
    }
}

/// Per-category token counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexiconCounts {
    pub nouns: usize,
    pub verbs: usize,
    pub adjectives: usize,
    pub adverbs: usize,
    pub conjunctions: usize,
    pub pronouns: usize,
    pub articles: usize,
    pub prepositions: usize,
    pub auxiliaries: usize,
    pub modals: usize,
}

/// Coerce any value into a token list: arrays keep their string entries,
/// everything else is empty.
pub fn tokens_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn lenient_tokens<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(tokens_from_value(&value))
}
