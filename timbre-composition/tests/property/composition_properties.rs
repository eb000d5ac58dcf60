use proptest::prelude::*;
use timbre_composition::{boost_learned, merge_with_retention, retained_len, Composer, LearnedContent};
use timbre_core::models::Bucket;
use timbre_core::{Lexicon, PosCategory, StanceBand};

fn unique_words(prefix: &'static str, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,5}", 0..max)
        .prop_map(move |set| set.into_iter().map(|w| format!("{prefix}{w}")).collect())
}

proptest! {
    #[test]
    fn retained_tail_is_bounded(
        learned in unique_words("l-", 8),
        base in unique_words("b-", 12),
        r in 0.0f64..=1.0,
    ) {
        prop_assume!(!learned.is_empty() && !base.is_empty());
        let out = merge_with_retention(&learned, &base, r);

        prop_assert_eq!(&out[..learned.len()], &learned[..]);
        let tail = &out[learned.len()..];
        prop_assert!(tail.len() <= retained_len(base.len(), r));
        prop_assert!(tail.len() <= ((base.len() as f64 * r).floor() as usize).max(1));
        prop_assert_eq!(tail, &base[..tail.len()]);
    }

    #[test]
    fn composed_templates_put_learned_first(
        base in unique_words("b-", 10),
        learned in unique_words("l-", 6),
        r in 0.0f64..=1.0,
    ) {
        prop_assume!(!base.is_empty());
        let mut bucket = Bucket::seeded(&base, &Lexicon::default());
        bucket.templates.extend(learned.iter().cloned());

        let config = Composer::new(r, r).compose(
            StanceBand::Neutral, &bucket, &base, &Lexicon::default(), None,
        );
        if learned.is_empty() {
            prop_assert_eq!(config.templates, base);
        } else {
            prop_assert_eq!(&config.templates[..learned.len()], &learned[..]);
            prop_assert!(config.templates.len() - learned.len() <= retained_len(base.len(), r));
        }
    }

    #[test]
    fn boosting_doubles_exactly_the_learned_tokens(
        base in unique_words("", 10),
        extra in unique_words("new-", 6),
        r in 0.0f64..=1.0,
    ) {
        let base_lexicon = Lexicon::default().with(
            PosCategory::Nouns,
            &base.iter().map(String::as_str).collect::<Vec<_>>(),
        );
        let mut bucket = Bucket::seeded(&[], &base_lexicon);
        for token in &extra {
            bucket.lexicon.push_unique(PosCategory::Nouns, token);
        }

        let learned = LearnedContent::isolate(&bucket, &[], &base_lexicon);
        let config = Composer::new(r, r).compose(
            StanceBand::Supportive, &bucket, &[], &base_lexicon, None,
        );
        let nouns = &config.lexicon.nouns;

        let mut i = 0;
        while i < nouns.len() {
            let token = &nouns[i];
            let count = nouns.iter().filter(|t| *t == token).count();
            if learned.lexicon.nouns.contains(token) {
                prop_assert_eq!(count, 2);
                prop_assert_eq!(&nouns[i + 1], token);
                i += 2;
            } else {
                prop_assert_eq!(count, 1);
                i += 1;
            }
        }
    }

    #[test]
    fn boost_never_drops_tokens(tokens in unique_words("", 10), pick in prop::collection::vec(any::<bool>(), 10)) {
        let composed = Lexicon::default().with(
            PosCategory::Verbs,
            &tokens.iter().map(String::as_str).collect::<Vec<_>>(),
        );
        let learned_tokens: Vec<&str> = tokens
            .iter()
            .zip(&pick)
            .filter(|(_, keep)| **keep)
            .map(|(t, _)| t.as_str())
            .collect();
        let learned = Lexicon::default().with(PosCategory::Verbs, &learned_tokens);

        let boosted = boost_learned(&composed, &learned);
        prop_assert_eq!(boosted.verbs.len(), tokens.len() + learned_tokens.len());
        let mut deduped = boosted.verbs.clone();
        deduped.dedup();
        prop_assert_eq!(deduped, tokens);
    }
}
