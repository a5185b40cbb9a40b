//! Composition gate: where the face sits on a rule-of-thirds grid.

use crate::domain::{
    CompositionFeedback, GateEvaluation, GateFeedback, GateKey, GridCell, ImageShape, IssueTag,
    KeypointSet,
};
use crate::text::Messages;

use super::{Gate, GateContext};

/// Face landmarks are only trusted when there are more than this many.
const MIN_FACE_LANDMARKS: usize = 30;

/// Score when either face cannot be located.
const NEUTRAL_SCORE: f64 = 75.0;

/// Score when both faces share a grid cell.
const SAME_CELL_SCORE: f64 = 90.0;

const MISMATCH_BASE_SCORE: f64 = 80.0;
const MISMATCH_MIN_SCORE: f64 = 40.0;

/// Movements smaller than this (normalized) are not worth mentioning.
const MOVE_DEADBAND: f64 = 0.05;

/// Horizontal camera movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    /// Move the camera left.
    Left,
    /// Move the camera right.
    Right,
}

/// Vertical camera movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    /// Tilt the camera up.
    Up,
    /// Tilt the camera down.
    Down,
}

/// Normalized face center, or `None` when no subject was detected.
///
/// Uses the mean of the face landmarks when there are enough of them, else
/// the nose keypoint.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn face_center(keypoints: &KeypointSet, shape: ImageShape) -> Option<[f64; 2]> {
    if !keypoints.has_subject() {
        return None;
    }

    let face = &keypoints.face_landmarks;
    if face.len() > MIN_FACE_LANDMARKS {
        let n = face.len() as f64;
        let (sum_x, sum_y) = face.values().fold((0.0, 0.0), |(x, y), k| {
            (x + k.position[0], y + k.position[1])
        });
        return Some(shape.normalize([sum_x / n, sum_y / n]));
    }

    keypoints.body("nose").map(|nose| shape.normalize(nose))
}

/// 1-based cell of a normalized position on the 3x3 grid.
#[must_use]
pub fn grid_position(center: [f64; 2]) -> GridCell {
    GridCell(grid_axis(center[0]), grid_axis(center[1]))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_axis(c: f64) -> u8 {
    // Clamped to 1..=3 before the cast, so truncation is exact
    ((c * 3.0).floor() + 1.0).max(1.0).min(3.0) as u8
}

/// Score for two centers in different cells: linear decay floored at 40.
#[must_use]
pub fn composition_score(distance: f64) -> f64 {
    (MISMATCH_BASE_SCORE - distance * 100.0).max(MISMATCH_MIN_SCORE)
}

/// Camera movement that brings the current face toward the reference position.
#[must_use]
pub fn move_direction(feedback: &CompositionFeedback, messages: &Messages) -> Option<String> {
    let dx = feedback.target_center[0] - feedback.current_center[0];
    let dy = feedback.target_center[1] - feedback.current_center[1];

    let pan = (dx.abs() > MOVE_DEADBAND).then(|| if dx > 0.0 { Pan::Right } else { Pan::Left });
    let tilt = (dy.abs() > MOVE_DEADBAND).then(|| if dy > 0.0 { Tilt::Down } else { Tilt::Up });

    messages.move_direction(pan, tilt)
}

/// Compares face positions on the rule-of-thirds grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompositionGate;

impl Gate for CompositionGate {
    fn key(&self) -> GateKey {
        GateKey::Composition
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation {
        let centers = (
            face_center(ctx.current, ctx.current_shape),
            face_center(ctx.reference, ctx.reference_shape),
        );
        let (Some(current_center), Some(target_center)) = centers else {
            tracing::debug!("no face found in one of the images, using neutral composition score");
            return GateEvaluation::scored(NEUTRAL_SCORE, GateFeedback::None);
        };

        let current_grid = grid_position(current_center);
        let target_grid = grid_position(target_center);
        if current_grid == target_grid {
            return GateEvaluation::scored(SAME_CELL_SCORE, GateFeedback::None);
        }

        let distance = (current_center[0] - target_center[0])
            .hypot(current_center[1] - target_center[1]);

        GateEvaluation::scored(
            composition_score(distance),
            GateFeedback::Composition(CompositionFeedback {
                issue: IssueTag::PositionMismatch,
                current_center,
                target_center,
                current_grid,
                target_grid,
                distance,
            }),
        )
    }
}
