//! Core domain types for gate evaluation.

mod analysis;
mod feedback;
mod gate;
mod keypoints;
mod result;
mod shape;

pub use analysis::{
    ActionableFeedback, AxisVerdict, ComparisonMode, CompressionReading, FramingAnalysis,
    LegacyComparison, MarginAnalysis, Margins, PrimaryAction, ShotType, ShotTypeComparison,
    SubjectRatio, VerticalVerdict,
};
pub use feedback::{
    AspectFeedback, CompositionFeedback, CompressionFeedback, CriticalFeedback, FramingFeedback,
    FramingIssue, GateFeedback, GridCell, IssueTag, LensType, PoseFeedback, PoseSuggestion,
    Priority, Severity,
};
pub use gate::{ExecutionPolicy, GateEvaluation, GateKey, GateOutcome};
pub use keypoints::{Keypoint, KeypointSet};
pub use result::{Evaluation, GateRunResult, InputFailure, RunStatus};
pub use shape::{ImageInfo, ImageShape};
