use timbre_core::config::*;
use timbre_core::PosCategory;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TimbreConfig::from_toml("").unwrap();

    // Merger defaults
    assert_eq!(config.merger.min_templates_per_stance, 4);
    assert_eq!(config.merger.min_lexicon_per_pos, 6);
    assert_eq!(config.merger.base_template_retention, 0.5);
    assert_eq!(config.merger.base_lexicon_retention, 0.5);

    // Taste defaults to empty, meaning built-ins apply
    assert!(config.taste.templates.is_empty());
    assert!(config.taste.lexicon.is_empty());

    // LLM defaults
    assert_eq!(config.llm.credentials_env, "TIMBRE_LLM_CONFIGS");
    assert_eq!(config.llm.default_base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm.stance_max_tokens, 16);
    assert_eq!(config.llm.pos_max_tokens, 512);
    assert_eq!(config.llm.max_retries, 0);
    assert_eq!(config.llm.selection, CredentialSelection::Random);
    assert!(config.llm.default_model.is_none());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_output);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[merger]
base_template_retention = 0.25

[taste]
templates = ["My {noun} is {adjective}"]

[taste.lexicon]
nouns = ["pattern"]
pronouns = ["I"]

[llm]
default_model = "small-model"
selection = "round_robin"
"#;
    let config = TimbreConfig::from_toml(toml).unwrap();
    assert_eq!(config.merger.base_template_retention, 0.25);
    // Non-overridden fields keep defaults
    assert_eq!(config.merger.base_lexicon_retention, 0.5);
    assert_eq!(config.taste.templates, vec!["My {noun} is {adjective}"]);
    assert_eq!(config.taste.lexicon.get(PosCategory::Nouns), &vec!["pattern".to_string()]);
    assert!(config.taste.lexicon.verbs.is_empty());
    assert_eq!(config.llm.default_model.as_deref(), Some("small-model"));
    assert_eq!(config.llm.selection, CredentialSelection::RoundRobin);
    assert_eq!(config.llm.timeout_secs, 30);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = TimbreConfig::from_toml("[merger\nbroken").unwrap_err();
    assert!(matches!(err, timbre_core::TimbreError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = TimbreConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = TimbreConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.merger.min_lexicon_per_pos,
        config.merger.min_lexicon_per_pos
    );
    assert_eq!(roundtripped.llm.default_base_url, config.llm.default_base_url);
}
