use proptest::prelude::*;
use timbre_core::constants::{ARTICLES, CONJUNCTIONS, MODALS, STRIPPED_PUNCTUATION};
use timbre_core::PosCategory;
use timbre_extraction::heuristic::classify_token;
use timbre_extraction::{extract_heuristic, strip_punctuation};

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z,.!?']{1,10}", 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn heuristic_is_deterministic(text in sentence()) {
        prop_assert_eq!(extract_heuristic(&text), extract_heuristic(&text));
    }

    #[test]
    fn one_template_part_per_token(text in sentence()) {
        let ext = extract_heuristic(&text);
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let parts: Vec<&str> = ext.template.split(' ').filter(|p| !p.is_empty()).collect();
        prop_assert_eq!(parts.len(), tokens.len());

        let usable = tokens.iter().filter(|t| !strip_punctuation(t).is_empty()).count();
        prop_assert_eq!(ext.lexicon.total_len(), usable);
    }

    #[test]
    fn lexicon_entries_carry_no_listed_punctuation(text in sentence()) {
        let ext = extract_heuristic(&text);
        for (_, tokens) in ext.lexicon.iter() {
            for token in tokens {
                prop_assert!(!token.is_empty());
                prop_assert!(!token.contains(STRIPPED_PUNCTUATION));
            }
        }
    }

    #[test]
    fn closed_classes_ignore_case(idx in 0usize..3, upper in any::<bool>()) {
        let cases = [
            (CONJUNCTIONS, PosCategory::Conjunctions),
            (ARTICLES, PosCategory::Articles),
            (MODALS, PosCategory::Modals),
        ];
        let (words, expected) = cases[idx];
        for word in words {
            let token = if upper { word.to_uppercase() } else { word.to_string() };
            let ext = extract_heuristic(&token);
            prop_assert_eq!(ext.lexicon.get(expected).len(), 1);
            prop_assert_eq!(classify_token(&token.to_lowercase()), expected);
        }
    }
}
