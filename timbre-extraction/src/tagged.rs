//! Primary path: build a template and lexicon from tagger records.

use timbre_core::models::{Extraction, TaggedToken};
use timbre_core::{Lexicon, PosCategory, VerbForm};

use crate::pos::category_for_label;
use crate::strip_punctuation;

/// Build an extraction from tagger output.
///
/// Returns `None` when the records carry no usable token at all, which the
/// engine treats the same as an empty tagging.
pub fn extract_from_tagged(tokens: &[TaggedToken]) -> Option<Extraction> {
    let mut lexicon = Lexicon::default();
    let mut parts: Vec<String> = Vec::with_capacity(tokens.len());

    for record in tokens.iter().filter(|r| !r.token.is_empty()) {
        let bare = strip_punctuation(&record.token);
        if bare.is_empty() {
            // Punctuation and whitespace artifacts stay literal.
            parts.push(record.token.clone());
            continue;
        }

        match category_for_label(&record.pos) {
            Some(PosCategory::Verbs) => {
                let entry = match record.lemma.as_deref() {
                    Some(lemma) if !lemma.is_empty() => lemma.to_string(),
                    _ => bare,
                };
                lexicon.push(PosCategory::Verbs, entry);
                let form = VerbForm::parse(record.verb_form.as_deref());
                parts.push(form.slot().placeholder().to_string());
            }
            Some(category) => {
                lexicon.push(category, bare);
                parts.push(category.slot().placeholder().to_string());
            }
            None => parts.push(record.token.clone()),
        }
    }

    if parts.is_empty() {
        return None;
    }

    Some(Extraction {
        template: parts.join(" "),
        lexicon,
    })
}
