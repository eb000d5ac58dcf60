use serde::{Deserialize, Serialize};

/// One token record produced by a part-of-speech tagger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaggedToken {
    pub token: String,
    pub pos: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            pos: pos.into(),
            verb_form: None,
            lemma: None,
        }
    }

    /// A verb record with its form and optional lemma.
    pub fn verb(token: impl Into<String>, verb_form: &str, lemma: Option<&str>) -> Self {
        Self {
            token: token.into(),
            pos: "verb".to_string(),
            verb_form: Some(verb_form.to_string()),
            lemma: lemma.map(str::to_string),
        }
    }
}
