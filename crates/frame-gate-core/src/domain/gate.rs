//! Gate identity and per-gate outcomes.

use serde::{Deserialize, Serialize};

use super::{GateFeedback, RunStatus};

/// One of the five staged checks.
///
/// Variant order is the evaluation order; `Ord` follows it, so ordered maps
/// keyed by `GateKey` iterate in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKey {
    /// Image width/height ratio.
    AspectRatio,
    /// Shot type, subject size and margins.
    Framing,
    /// Subject position on the rule-of-thirds grid.
    Composition,
    /// Lens compression (focal length character).
    Compression,
    /// Advisory posture suggestions; never blocks.
    Pose,
}

impl GateKey {
    /// Fixed evaluation order.
    pub const ORDER: [Self; 5] = [
        Self::AspectRatio,
        Self::Framing,
        Self::Composition,
        Self::Compression,
        Self::Pose,
    ];

    /// Position in [`GateKey::ORDER`] (0-4).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::AspectRatio => 0,
            Self::Framing => 1,
            Self::Composition => 2,
            Self::Compression => 3,
            Self::Pose => 4,
        }
    }

    /// Snake-case identifier, as used in serialized results.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AspectRatio => "aspect_ratio",
            Self::Framing => "framing",
            Self::Composition => "composition",
            Self::Compression => "compression",
            Self::Pose => "pose",
        }
    }

    /// Whether a failure at this gate can block the run.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::Pose)
    }

    /// Status reported when the run is blocked at this gate.
    #[must_use]
    pub const fn blocked_status(self) -> Option<RunStatus> {
        match self {
            Self::AspectRatio => Some(RunStatus::BlockedAtAspectRatio),
            Self::Framing => Some(RunStatus::BlockedAtFraming),
            Self::Composition => Some(RunStatus::BlockedAtComposition),
            Self::Compression => Some(RunStatus::BlockedAtCompression),
            Self::Pose => None,
        }
    }
}

impl std::fmt::Display for GateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the orchestrator stops at the first failing gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionPolicy {
    /// Halt at the first failing gate.
    #[default]
    StopOnFail,
    /// Run every gate; only the first failure is reported as blocking.
    EvaluateAll,
}

impl ExecutionPolicy {
    /// Maps the classic `stop_on_fail` flag to a policy.
    #[must_use]
    pub const fn from_stop_on_fail(stop_on_fail: bool) -> Self {
        if stop_on_fail {
            Self::StopOnFail
        } else {
            Self::EvaluateAll
        }
    }
}

/// Raw output of a gate function, before thresholding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateEvaluation {
    /// Score (0-100); `None` for the advisory pose gate.
    pub score: Option<f64>,
    /// Structured feedback.
    pub feedback: GateFeedback,
}

impl GateEvaluation {
    /// A scored evaluation.
    #[must_use]
    pub const fn scored(score: f64, feedback: GateFeedback) -> Self {
        Self {
            score: Some(score),
            feedback,
        }
    }

    /// An unscored, advisory evaluation.
    #[must_use]
    pub const fn advisory(feedback: GateFeedback) -> Self {
        Self {
            score: None,
            feedback,
        }
    }
}

/// Recorded result of one gate invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateOutcome {
    /// Score (0-100). Absent for the pose gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Whether the score met the threshold.
    pub passed: bool,
    /// Structured feedback; always present, `kind = "none"` when empty.
    pub feedback: GateFeedback,
    /// Threshold the score was compared against. Absent for the pose gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl GateOutcome {
    /// Applies a threshold to a scored evaluation.
    ///
    /// Unscored evaluations always pass.
    #[must_use]
    pub fn judge(evaluation: GateEvaluation, threshold: Option<f64>) -> Self {
        let passed = match (evaluation.score, threshold) {
            (Some(score), Some(threshold)) => score >= threshold,
            _ => true,
        };
        Self {
            score: evaluation.score,
            passed,
            feedback: evaluation.feedback,
            threshold,
        }
    }
}
