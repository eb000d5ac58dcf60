use proptest::prelude::*;
use serde_json::{json, Map, Value};
use timbre_core::{Lexicon, PosCategory, RelationalStance, TasteConfig};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn any_json() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,12}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// An object whose category keys hold arbitrary values.
fn lexicon_like() -> impl Strategy<Value = Value> {
    prop::collection::vec((0usize..10, any_json()), 0..10).prop_map(|entries| {
        let mut map = Map::new();
        for (idx, value) in entries {
            map.insert(PosCategory::ALL[idx].key().to_string(), value);
        }
        Value::Object(map)
    })
}

fn string_entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

proptest! {
    #[test]
    fn lenient_lexicon_accepts_any_json(value in any_json()) {
        let lexicon = Lexicon::from_value(&value);
        if !value.is_object() {
            prop_assert_eq!(lexicon, Lexicon::default());
        }
    }

    #[test]
    fn lenient_lexicon_keeps_exactly_the_string_entries(value in lexicon_like()) {
        let lexicon = Lexicon::from_value(&value);
        for category in PosCategory::ALL {
            prop_assert_eq!(
                lexicon.get(category),
                &string_entries(value.get(category.key()))
            );
        }
    }

    #[test]
    fn relational_stance_ignores_case_and_padding(
        idx in 0usize..4,
        upper in prop::collection::vec(any::<bool>(), 13),
        pad in "[ \t]{0,3}",
    ) {
        let canonical = ["defensive", "cautious", "collaborative", "intimate"][idx];
        let mixed: String = canonical
            .chars()
            .zip(&upper)
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let label = format!("{pad}{mixed}{pad}");

        let parsed: RelationalStance = serde_json::from_value(json!(label)).unwrap();
        prop_assert_eq!(&parsed, &RelationalStance::parse(canonical));
        prop_assert_ne!(parsed, RelationalStance::Unknown);
    }

    #[test]
    fn effective_base_is_never_empty(templates in prop::collection::vec("[a-z{} ]{1,12}", 0..4), value in lexicon_like()) {
        let taste = TasteConfig::new(templates, Lexicon::from_value(&value));
        prop_assert!(!taste.effective_templates().is_empty());
        prop_assert!(!taste.effective_lexicon().is_empty());
    }
}
