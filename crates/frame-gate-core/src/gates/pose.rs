//! Pose gate: advisory posture suggestions for the current image.

use crate::domain::{GateEvaluation, GateFeedback, GateKey, PoseFeedback, PoseSuggestion};

use super::{Gate, GateContext};

/// Shoulder tilt above this many degrees is worth mentioning.
const MAX_SHOULDER_TILT: f64 = 20.0;

/// Degrees the shoulder line deviates from horizontal, either way round.
#[must_use]
pub fn shoulder_tilt(left: [f64; 2], right: [f64; 2]) -> f64 {
    let angle = (right[1] - left[1]).atan2(right[0] - left[0]).to_degrees();
    if angle.abs() > 90.0 {
        (angle.abs() - 180.0).abs()
    } else {
        angle.abs()
    }
}

/// Looks at the current pose only. Never scored, never blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseGate;

impl Gate for PoseGate {
    fn key(&self) -> GateKey {
        GateKey::Pose
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation {
        let mut suggestions = Vec::new();

        if let (Some(left), Some(right)) = (
            ctx.current.body("left_shoulder"),
            ctx.current.body("right_shoulder"),
        ) {
            let tilt = shoulder_tilt(left, right);
            tracing::trace!(tilt, "shoulder tilt");
            if tilt > MAX_SHOULDER_TILT {
                suggestions.push(PoseSuggestion {
                    category: "posture".into(),
                    suggestion: ctx.messages.shoulder_tilt(tilt),
                    importance: "optional".into(),
                });
            }
        }

        GateEvaluation::advisory(GateFeedback::Pose(PoseFeedback { suggestions }))
    }
}
