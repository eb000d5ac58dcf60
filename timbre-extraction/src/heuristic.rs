//! Fallback path: closed-class lookups, then suffix rules, then noun.
//!
//! This is an approximate last resort. Closed-class checks run before the
//! suffix rules and the order below must not change; "family" being read as
//! an adverb is expected.

use timbre_core::constants::{ARTICLES, AUXILIARIES, CONJUNCTIONS, MODALS, PREPOSITIONS, PRONOUNS};
use timbre_core::models::Extraction;
use timbre_core::{Lexicon, PosCategory};

use crate::strip_punctuation;

/// Classify an already lower-cased, punctuation-free token.
pub fn classify_token(lower: &str) -> PosCategory {
    if CONJUNCTIONS.contains(&lower) {
        PosCategory::Conjunctions
    } else if PRONOUNS.contains(&lower) {
        PosCategory::Pronouns
    } else if ARTICLES.contains(&lower) {
        PosCategory::Articles
    } else if PREPOSITIONS.contains(&lower) {
        PosCategory::Prepositions
    } else if AUXILIARIES.contains(&lower) {
        PosCategory::Auxiliaries
    } else if MODALS.contains(&lower) {
        PosCategory::Modals
    } else if lower.ends_with("ly") {
        PosCategory::Adverbs
    } else if lower.ends_with("ive") || lower.ends_with("ous") || lower.ends_with("ful") {
        PosCategory::Adjectives
    } else if lower.ends_with("ing") || lower.ends_with("ed") {
        PosCategory::Verbs
    } else {
        PosCategory::Nouns
    }
}

/// Extract a template and lexicon without a tagger.
///
/// Lexicon entries keep the original casing; classification uses the
/// lower-cased form. Every heuristic verb gets the bare `{verb}` slot.
pub fn extract_heuristic(text: &str) -> Extraction {
    let mut lexicon = Lexicon::default();
    let mut parts: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        let bare = strip_punctuation(token);
        if bare.is_empty() {
            parts.push(token.to_string());
            continue;
        }
        let category = classify_token(&bare.to_lowercase());
        parts.push(category.slot().placeholder().to_string());
        lexicon.push(category, bare);
    }

    Extraction {
        template: parts.join(" "),
        lexicon,
    }
}
