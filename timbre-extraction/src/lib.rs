//! # timbre-extraction
//!
//! Turns raw utterance text into a slot template plus a part-of-speech
//! lexicon. Tagger output is tried first; an empty, failed, or unusable
//! tagging falls back to a deterministic suffix/closed-class heuristic.

pub mod engine;
pub mod heuristic;
pub mod pos;
pub mod tagged;

pub use engine::{ExtractionOutcome, ExtractionPath, FeatureExtractor};
pub use heuristic::extract_heuristic;
pub use tagged::extract_from_tagged;

/// Remove listed punctuation from anywhere in a token.
pub fn strip_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| !timbre_core::constants::STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_listed_punctuation_only() {
        assert_eq!(strip_punctuation("(hello!)"), "hello");
        assert_eq!(strip_punctuation("don't"), "don't");
        assert_eq!(strip_punctuation("\"wait,\""), "wait");
        assert_eq!(strip_punctuation("?!"), "");
        assert_eq!(strip_punctuation("—"), "—");
    }
}
