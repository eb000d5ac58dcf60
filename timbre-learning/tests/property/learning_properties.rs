use proptest::prelude::*;
use timbre_core::models::Extraction;
use timbre_core::{Lexicon, PosCategory, StanceBand};
use timbre_learning::{normalize_stance, BucketStore};

fn band() -> impl Strategy<Value = StanceBand> {
    prop::sample::select(StanceBand::ALL.to_vec())
}

fn extraction() -> impl Strategy<Value = Extraction> {
    (
        "[a-z{} ]{0,24}",
        prop::collection::vec(("[a-z]{1,6}", 0usize..10), 0..12),
    )
        .prop_map(|(template, tokens)| {
            let mut lexicon = Lexicon::default();
            for (token, idx) in tokens {
                lexicon.push(PosCategory::ALL[idx], token);
            }
            Extraction { template, lexicon }
        })
}

fn counts(store: &BucketStore, band: StanceBand) -> (usize, Vec<usize>) {
    let bucket = store.bucket(band);
    (
        bucket.templates.len(),
        bucket.lexicon.iter().map(|(_, t)| t.len()).collect(),
    )
}

proptest! {
    #[test]
    fn storing_twice_equals_storing_once(b in band(), ext in extraction()) {
        let mut once = BucketStore::default();
        once.store(b, &ext);

        let mut twice = BucketStore::default();
        twice.store(b, &ext);
        twice.store(b, &ext);

        prop_assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn buckets_never_shrink(seq in prop::collection::vec((band(), extraction()), 1..20)) {
        let mut store = BucketStore::default();
        for (b, ext) in &seq {
            let (before_t, before_l) = counts(&store, *b);
            store.store(*b, ext);
            let (after_t, after_l) = counts(&store, *b);
            prop_assert!(after_t >= before_t);
            for (after, before) in after_l.iter().zip(&before_l) {
                prop_assert!(after >= before);
            }
        }
    }

    #[test]
    fn lists_stay_duplicate_free(seq in prop::collection::vec((band(), extraction()), 1..20)) {
        let mut store = BucketStore::default();
        for (b, ext) in &seq {
            store.store(*b, ext);
        }
        for b in StanceBand::ALL {
            let bucket = store.bucket(b);
            let mut templates = bucket.templates.clone();
            templates.sort();
            templates.dedup();
            prop_assert_eq!(templates.len(), bucket.templates.len());
            for (_, tokens) in bucket.lexicon.iter() {
                let mut sorted = tokens.to_vec();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), tokens.len());
            }
        }
    }

    #[test]
    fn normalizer_is_total(label in ".{0,32}") {
        let band = normalize_stance(&label);
        prop_assert!(StanceBand::ALL.contains(&band));
    }
}
