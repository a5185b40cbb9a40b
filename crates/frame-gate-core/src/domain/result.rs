//! Terminal result of a pipeline run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CriticalFeedback, GateKey, GateOutcome, PoseSuggestion};

/// Outcome tag of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Aspect ratio failed.
    BlockedAtAspectRatio,
    /// Framing failed.
    BlockedAtFraming,
    /// Composition failed.
    BlockedAtComposition,
    /// Compression failed.
    BlockedAtCompression,
    /// Every scored gate met its threshold.
    AllGatesPassed,
}

impl RunStatus {
    /// Whether this status means a gate blocked the run.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        !matches!(self, Self::AllGatesPassed)
    }
}

/// Full result of a gate run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateRunResult {
    /// Index of the last gate attempted (0-4).
    pub gate_level: u8,
    /// Outcome tag.
    pub status: RunStatus,
    /// Gates that passed, in order.
    pub gates_passed: Vec<GateKey>,
    /// Per-gate outcomes; keys are always a prefix of [`GateKey::ORDER`].
    pub gates_results: BTreeMap<GateKey, GateOutcome>,
    /// First failing gate, if any.
    pub blocked_at: Option<GateKey>,
    /// What to fix at the blocking gate.
    pub critical_feedback: Option<CriticalFeedback>,
    /// Aggregate score (0-100).
    pub overall_score: f64,
    /// One-line status message.
    pub message: String,
    /// Friendly guidance for the user.
    pub friendly_summary: String,
    /// Textual gate table, one line per gate.
    pub summary: String,
    /// Posture suggestions from the pose gate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pose_suggestions: Vec<PoseSuggestion>,
}

impl GateRunResult {
    /// Outcome of a specific gate, if it ran.
    #[must_use]
    pub fn outcome(&self, gate: GateKey) -> Option<&GateOutcome> {
        self.gates_results.get(&gate)
    }

    /// Score of a specific gate, if it ran and was scored.
    #[must_use]
    pub fn score(&self, gate: GateKey) -> Option<f64> {
        self.outcome(gate).and_then(|o| o.score)
    }
}

/// Both images are required; this is reported when either fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFailure {
    /// Human-readable reason.
    pub error: String,
    /// Always 0: no gate was attempted.
    pub gate_level: u8,
}

impl InputFailure {
    /// Creates an input failure.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            gate_level: 0,
        }
    }
}

/// What a session hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    /// Images could not be loaded; no gate ran.
    Failed(InputFailure),
    /// Gates ran.
    Completed(Box<GateRunResult>),
}

impl Evaluation {
    /// The gate run result, if the images loaded.
    #[must_use]
    pub fn as_run(&self) -> Option<&GateRunResult> {
        match self {
            Self::Failed(_) => None,
            Self::Completed(result) => Some(result),
        }
    }
}
