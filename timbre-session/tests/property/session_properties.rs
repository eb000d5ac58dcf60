use proptest::prelude::*;
use timbre_core::config::MergerConfig;
use timbre_core::{Lexicon, PosCategory, StanceBand, TasteConfig};
use timbre_session::{Utterance, VoiceMerger};

const BASE_TEMPLATE: &str = "My {noun} is {adjective}";

fn taste() -> TasteConfig {
    TasteConfig::new(
        vec![BASE_TEMPLATE.to_string()],
        Lexicon::default().with(PosCategory::Nouns, &["pattern"]),
    )
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..8).prop_map(|words| words.join(" "))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn neutral_bucket_only_grows(texts in prop::collection::vec(sentence(), 1..10)) {
        let merger = VoiceMerger::new(taste(), MergerConfig::default());
        block_on(async {
            for text in &texts {
                let before = merger.bucket(StanceBand::Neutral);
                merger.observe_utterance(&Utterance::new(text.as_str())).await;
                let after = merger.bucket(StanceBand::Neutral);

                assert!(after.templates.starts_with(&before.templates));
                for (category, tokens) in before.lexicon.iter() {
                    assert!(after.lexicon.get(category).starts_with(tokens));
                }
            }
        });
    }

    #[test]
    fn exported_json_restores_identical_state(texts in prop::collection::vec(sentence(), 0..6)) {
        let source = VoiceMerger::new(taste(), MergerConfig::default());
        block_on(async {
            for text in &texts {
                source.observe_utterance(&Utterance::new(text.as_str())).await;
            }
        });

        let restored = VoiceMerger::new(taste(), MergerConfig::default());
        prop_assert!(restored.import_json(&source.export_json().unwrap()).unwrap());
        prop_assert_eq!(restored.export_snapshot(), source.export_snapshot());
        for band in StanceBand::ALL {
            prop_assert_eq!(restored.bucket(band), source.bucket(band));
        }
        prop_assert_eq!(
            restored.generation_config(None, None, None),
            source.generation_config(None, None, None)
        );
    }

    #[test]
    fn base_templates_always_survive_composition(texts in prop::collection::vec(sentence(), 0..6)) {
        let merger = VoiceMerger::new(taste(), MergerConfig::default());
        block_on(async {
            for text in &texts {
                merger.observe_utterance(&Utterance::new(text.as_str())).await;
            }
        });
        let config = merger.generation_config(None, None, None);
        let has_base = config.templates.iter().any(|t| t == BASE_TEMPLATE);
        prop_assert!(has_base, "base template dropped from {:?}", config.templates);
        let has_pattern = config.lexicon.nouns.iter().any(|t| t == "pattern");
        prop_assert!(has_pattern, "base noun dropped from {:?}", config.lexicon.nouns);
    }
}
