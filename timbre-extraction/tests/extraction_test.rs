use test_fixtures::{FailingTagger, ScriptedTagger};
use timbre_core::models::TaggedToken;
use timbre_extraction::{ExtractionPath, FeatureExtractor};

// ── Tagged path ──

#[tokio::test]
async fn scripted_tagging_produces_verb_form_slots() {
    let text = "She noticed the drifting light";
    let tagger = ScriptedTagger::new().script(
        text,
        vec![
            TaggedToken::new("She", "pronoun"),
            TaggedToken::verb("noticed", "past", Some("notice")),
            TaggedToken::new("the", "det"),
            TaggedToken::verb("drifting", "gerund", Some("drift")),
            TaggedToken::new("light", "noun"),
        ],
    );
    let outcome = FeatureExtractor::new(tagger).extract(text).await;

    assert_eq!(outcome.path, ExtractionPath::Tagged);
    assert_eq!(
        outcome.extraction.template,
        "{pronoun} {verbPast} {article} {verbGerund} {noun}"
    );
    assert_eq!(outcome.extraction.lexicon.verbs, vec!["notice", "drift"]);
    assert_eq!(outcome.extraction.lexicon.articles, vec!["the"]);
}

#[tokio::test]
async fn unscripted_text_uses_heuristic() {
    let tagger = ScriptedTagger::new().script("other", vec![TaggedToken::new("other", "noun")]);
    let outcome = FeatureExtractor::new(tagger).extract("we walked slowly").await;

    assert_eq!(outcome.path, ExtractionPath::Heuristic);
    assert_eq!(outcome.extraction.template, "{pronoun} {verb} {adverb}");
}

// ── Fallback ──

#[tokio::test]
async fn failing_tagger_never_surfaces_an_error() {
    let outcome = FeatureExtractor::new(FailingTagger)
        .extract("I love this bright signal")
        .await;

    assert_eq!(outcome.path, ExtractionPath::Heuristic);
    assert_eq!(outcome.extraction.lexicon.nouns, vec!["love", "this", "bright", "signal"]);
    assert_eq!(outcome.extraction.lexicon.pronouns, vec!["I"]);
}

#[tokio::test]
async fn identical_input_gives_identical_output() {
    let extractor = FeatureExtractor::heuristic();
    let a = extractor.extract("Through quiet rooms, we move.").await;
    let b = extractor.extract("Through quiet rooms, we move.").await;
    assert_eq!(a, b);
    assert_eq!(
        a.extraction.template,
        "{preposition} {noun} {noun} {pronoun} {noun}"
    );
}
