use serde::{Deserialize, Serialize};

use crate::stance::RelationalStance;

/// Which way an observed utterance travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Someone else addressed this agent.
    #[default]
    Incoming,
    /// This agent addressed someone else.
    Outgoing,
}

/// Relational state for one (observer, observed) pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionState {
    pub stance: RelationalStance,
    pub trust: f64,
    pub comfort: f64,
    pub alignment: f64,
    pub energy: f64,
}

/// One interaction record owned by the relational model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interaction {
    pub from_id: String,
    pub to_id: String,
    pub state: InteractionState,
}

/// Change applied to the four relational axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelationalDelta {
    pub trust: f64,
    pub comfort: f64,
    pub alignment: f64,
    pub energy: f64,
}

impl RelationalDelta {
    pub const SUPPORTIVE: Self = Self {
        trust: 0.05,
        comfort: 0.05,
        alignment: 0.03,
        energy: 0.02,
    };

    pub const DEFENSIVE: Self = Self {
        trust: -0.05,
        comfort: -0.06,
        alignment: -0.04,
        energy: -0.03,
    };

    pub const NEUTRAL: Self = Self {
        trust: 0.01,
        comfort: 0.01,
        alignment: 0.0,
        energy: 0.0,
    };

    /// Every axis multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            trust: self.trust * factor,
            comfort: self.comfort * factor,
            alignment: self.alignment * factor,
            energy: self.energy * factor,
        }
    }
}

impl InteractionState {
    /// Add a delta to every axis.
    pub fn apply(&mut self, delta: &RelationalDelta) {
        self.trust += delta.trust;
        self.comfort += delta.comfort;
        self.alignment += delta.alignment;
        self.energy += delta.energy;
    }
}
