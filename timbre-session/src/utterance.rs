use serde::{Deserialize, Serialize};
use timbre_core::models::Direction;
use timbre_core::{Lexicon, StanceBand};

/// One observed utterance and who exchanged it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Utterance {
    pub text: String,
    pub speaker_id: Option<String>,
    pub target_id: Option<String>,
    pub direction: Direction,
    /// Optional context score in [0, 1] that scales the relational nudge.
    pub score: Option<f64>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn speaker(mut self, speaker_id: impl Into<String>) -> Self {
        self.speaker_id = Some(speaker_id.into());
        self
    }

    pub fn target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Both ids, when both are present and non-empty.
    pub fn participants(&self) -> Option<(&str, &str)> {
        let speaker = self.speaker_id.as_deref().filter(|s| !s.is_empty())?;
        let target = self.target_id.as_deref().filter(|s| !s.is_empty())?;
        Some((speaker, target))
    }
}

/// What `observe_utterance` learned from one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub stance: StanceBand,
    pub template: String,
    pub lexicon: Lexicon,
}
