//! Stance bands used for bucket routing, and the relational stances reported
//! by the external relational model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Coarse interpersonal posture used to route learning and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StanceBand {
    Defensive,
    #[default]
    Neutral,
    Supportive,
}

impl StanceBand {
    pub const ALL: [StanceBand; 3] = [
        StanceBand::Defensive,
        StanceBand::Neutral,
        StanceBand::Supportive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Defensive => "defensive",
            Self::Neutral => "neutral",
            Self::Supportive => "supportive",
        }
    }

    /// Exact canonical label match. Use the learning crate's normalizer for
    /// raw classifier output.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "defensive" => Some(Self::Defensive),
            "neutral" => Some(Self::Neutral),
            "supportive" => Some(Self::Supportive),
            _ => None,
        }
    }
}

impl fmt::Display for StanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stance held by the relational model for one (observer, observed) pair.
///
/// Deserialization goes through [`RelationalStance::parse`], so labels are
/// matched case-insensitively and unrecognised ones become `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationalStance {
    Defensive,
    #[default]
    Cautious,
    Collaborative,
    Intimate,
    /// Anything the relational model reports that we do not recognise.
    Unknown,
}

impl<'de> Deserialize<'de> for RelationalStance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}

impl RelationalStance {
    /// Case-insensitive parse; unrecognised labels become `Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "defensive" => Self::Defensive,
            "cautious" => Self::Cautious,
            "collaborative" => Self::Collaborative,
            "intimate" => Self::Intimate,
            _ => Self::Unknown,
        }
    }

    /// Band used to pick a bucket for generation.
    pub fn band(&self) -> StanceBand {
        match self {
            Self::Defensive => StanceBand::Defensive,
            Self::Cautious => StanceBand::Neutral,
            Self::Collaborative | Self::Intimate => StanceBand::Supportive,
            Self::Unknown => StanceBand::Neutral,
        }
    }
}
