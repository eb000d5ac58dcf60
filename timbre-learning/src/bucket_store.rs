//! Three append-only accumulators, one per stance band.
//!
//! Storage is set-like per list: a template or token is appended only when
//! the list does not already hold it (exact, case-sensitive match), so lists
//! keep first-seen order and never contain duplicates. Nothing is removed
//! except by wholesale replacement.

use serde::{Deserialize, Serialize};
use timbre_core::models::{Bucket, BucketSet, Extraction};
use timbre_core::{Lexicon, StanceBand};
use tracing::debug;

/// What a single `store` call added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreOutcome {
    pub template_added: bool,
    pub tokens_added: usize,
}

impl StoreOutcome {
    pub fn is_noop(&self) -> bool {
        !self.template_added && self.tokens_added == 0
    }
}

/// Owner of the three stance buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketStore {
    buckets: BucketSet,
}

impl BucketStore {
    /// Every bucket starts as a copy of the base style.
    pub fn seeded(templates: &[String], lexicon: &Lexicon) -> Self {
        Self {
            buckets: BucketSet::seeded(templates, lexicon),
        }
    }

    pub fn bucket(&self, band: StanceBand) -> &Bucket {
        self.buckets.get(band)
    }

    pub fn buckets(&self) -> &BucketSet {
        &self.buckets
    }

    /// Append an extraction into the bucket for `band`.
    pub fn store(&mut self, band: StanceBand, extraction: &Extraction) -> StoreOutcome {
        let bucket = self.buckets.get_mut(band);
        let mut outcome = StoreOutcome::default();

        let template = &extraction.template;
        if !template.is_empty() && !bucket.templates.iter().any(|t| t == template) {
            bucket.templates.push(template.clone());
            outcome.template_added = true;
        }

        for (category, tokens) in extraction.lexicon.iter() {
            for token in tokens {
                if bucket.lexicon.push_unique(category, token) {
                    outcome.tokens_added += 1;
                }
            }
        }

        debug!(
            stance = %band,
            template_added = outcome.template_added,
            tokens_added = outcome.tokens_added,
            "extraction stored"
        );
        outcome
    }

    /// Replace all three buckets at once.
    pub fn replace_all(&mut self, buckets: BucketSet) {
        self.buckets = buckets;
    }

    /// Re-seed every bucket from a new base, discarding learned content.
    pub fn reseed(&mut self, templates: &[String], lexicon: &Lexicon) {
        self.buckets = BucketSet::seeded(templates, lexicon);
    }

    /// Owned copy of the current buckets.
    pub fn snapshot(&self) -> BucketSet {
        self.buckets.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timbre_core::PosCategory;

    fn extraction(template: &str, nouns: &[&str]) -> Extraction {
        Extraction {
            template: template.to_string(),
            lexicon: Lexicon::default().with(PosCategory::Nouns, nouns),
        }
    }

    #[test]
    fn seeded_buckets_are_independent_copies() {
        let base = vec!["My {noun}".to_string()];
        let mut store = BucketStore::seeded(&base, &Lexicon::builtin_default());
        store.store(StanceBand::Supportive, &extraction("{noun} {verb}", &["signal"]));

        assert_eq!(store.bucket(StanceBand::Supportive).templates.len(), 2);
        assert_eq!(store.bucket(StanceBand::Neutral).templates, base);
        assert!(!store
            .bucket(StanceBand::Defensive)
            .lexicon
            .contains(PosCategory::Nouns, "signal"));
    }

    #[test]
    fn storing_twice_is_idempotent() {
        let mut store = BucketStore::default();
        let ext = extraction("{noun} {noun}", &["signal", "signal", "light"]);

        let first = store.store(StanceBand::Neutral, &ext);
        assert!(first.template_added);
        assert_eq!(first.tokens_added, 2);

        let after_once = store.snapshot();
        let second = store.store(StanceBand::Neutral, &ext);
        assert!(second.is_noop());
        assert_eq!(store.snapshot(), after_once);
    }

    #[test]
    fn empty_template_is_not_stored_but_tokens_are() {
        let mut store = BucketStore::default();
        let outcome = store.store(StanceBand::Defensive, &extraction("", &["wall"]));
        assert!(!outcome.template_added);
        assert_eq!(outcome.tokens_added, 1);
        assert!(store.bucket(StanceBand::Defensive).templates.is_empty());
    }

    #[test]
    fn dedup_is_case_sensitive_and_keeps_first_seen_order() {
        let mut store = BucketStore::default();
        store.store(StanceBand::Neutral, &extraction("A", &["Signal"]));
        store.store(StanceBand::Neutral, &extraction("a", &["signal", "Signal"]));
        store.store(StanceBand::Neutral, &extraction("A", &[]));

        let bucket = store.bucket(StanceBand::Neutral);
        assert_eq!(bucket.templates, vec!["A", "a"]);
        assert_eq!(bucket.lexicon.nouns, vec!["Signal", "signal"]);
    }

    #[test]
    fn reseed_discards_learning() {
        let base = vec!["base".to_string()];
        let mut store = BucketStore::seeded(&base, &Lexicon::default());
        store.store(StanceBand::Neutral, &extraction("learned", &["x"]));
        store.reseed(&base, &Lexicon::default());
        assert_eq!(store.bucket(StanceBand::Neutral).templates, base);
        assert!(store.bucket(StanceBand::Neutral).lexicon.is_empty());
    }
}
