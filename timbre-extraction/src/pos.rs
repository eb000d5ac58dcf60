//! Tagger part-of-speech labels → lexicon categories.

use timbre_core::PosCategory;

/// Map a tagger `pos` label (case-insensitive) to a lexicon category.
/// Labels outside the known set (punctuation, numerals, ...) return `None`
/// and pass through into the template literally.
pub fn category_for_label(pos: &str) -> Option<PosCategory> {
    match pos.trim().to_lowercase().as_str() {
        "noun" => Some(PosCategory::Nouns),
        "verb" => Some(PosCategory::Verbs),
        "adjective" => Some(PosCategory::Adjectives),
        "adverb" => Some(PosCategory::Adverbs),
        "conjunction" => Some(PosCategory::Conjunctions),
        "pronoun" => Some(PosCategory::Pronouns),
        "article" | "det" | "determiner" => Some(PosCategory::Articles),
        "preposition" | "prep" => Some(PosCategory::Prepositions),
        "auxiliary" | "aux" => Some(PosCategory::Auxiliaries),
        "modal" | "modal_verb" => Some(PosCategory::Modals),
        _ => None,
    }
}
