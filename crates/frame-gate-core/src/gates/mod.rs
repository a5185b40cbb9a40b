//! Gate implementations.
//!
//! Each gate implements the [`Gate`] trait and maps the collaborator outputs
//! gathered in a [`GateContext`] to a score and a feedback payload. Gates do
//! not apply thresholds; the pipeline does.

mod aspect;
mod composition;
mod compression;
mod framing;
mod pose;

pub use aspect::{aspect_ratio_score, AspectRatioGate, RatioBucket};
pub use composition::{
    composition_score, face_center, grid_position, move_direction, CompositionGate, Pan, Tilt,
};
pub use compression::{
    compression_score, parse_compression, CompressionGate, LensShift, ShiftTier,
};
pub use framing::FramingGate;
pub use pose::{shoulder_tilt, PoseGate};

use crate::config::DeviceProfile;
use crate::domain::{GateEvaluation, GateKey, ImageShape, KeypointSet, LegacyComparison};
use crate::text::Messages;

/// Everything a gate may look at for one run.
#[derive(Debug, Clone, Copy)]
pub struct GateContext<'a> {
    /// Keypoints of the current image.
    pub current: &'a KeypointSet,
    /// Keypoints of the reference image.
    pub reference: &'a KeypointSet,
    /// Shape of the current image.
    pub current_shape: ImageShape,
    /// Shape of the reference image.
    pub reference_shape: ImageShape,
    /// Legacy comparator output.
    pub legacy: &'a LegacyComparison,
    /// Camera the user is shooting with.
    pub device: &'a DeviceProfile,
    /// Message catalog for feedback text.
    pub messages: &'a Messages,
}

/// A single staged check.
pub trait Gate: Send + Sync {
    /// Which gate this is.
    fn key(&self) -> GateKey;

    /// Scores the current image against the reference.
    ///
    /// Never fails: inputs that cannot be evaluated degrade to a neutral score.
    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation;
}
