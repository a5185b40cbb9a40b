//! Frame Gate Core - Domain logic and the gate evaluation pipeline
//!
//! Compares a "current" photo against a "reference" photo through five
//! staged gates (aspect ratio, framing, composition, compression, pose) and
//! assembles scores, blocking verdicts and actionable feedback into one
//! result. Pose extraction, framing/margin analysis and the legacy
//! compression estimate are consumed through the traits in [`ports`].

pub mod config;
pub mod domain;
pub mod gates;
pub mod pipeline;
pub mod ports;
pub mod summary;
pub mod text;

pub use config::{DeviceCatalog, DeviceProfile, GateConfig, GateThresholds};
pub use domain::{
    CriticalFeedback, Evaluation, ExecutionPolicy, GateFeedback, GateKey, GateOutcome,
    GateRunResult, ImageInfo, ImageShape, InputFailure, KeypointSet, RunStatus,
};
pub use pipeline::{GateInput, GatePipeline, GateSession};
pub use ports::{
    FramingAnalyzer, ImageLoader, KeypointExtractor, LegacyComparator, MarginAnalyzer,
    ReportOutput,
};
pub use text::{Language, Messages};
