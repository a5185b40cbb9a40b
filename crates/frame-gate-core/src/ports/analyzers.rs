//! Ports for the sub-analyzers the gates consume.
//!
//! Implementations are expected to be deterministic and free of per-call
//! shared state, so one pipeline can serve concurrent runs.

use crate::domain::{
    ComparisonMode, FramingAnalysis, ImageInfo, ImageShape, KeypointSet, LegacyComparison,
    MarginAnalysis,
};

/// Extracts body and face keypoints from an image.
pub trait KeypointExtractor: Send + Sync {
    /// Runs pose extraction.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails. Callers treat this as "no subject".
    fn extract(&self, image: &ImageInfo) -> anyhow::Result<KeypointSet>;
}

/// Compares shot type and subject size.
pub trait FramingAnalyzer: Send + Sync {
    /// Analyzes the current image's framing against the reference.
    fn analyze(
        &self,
        current: &KeypointSet,
        reference: &KeypointSet,
        current_shape: ImageShape,
        reference_shape: ImageShape,
    ) -> FramingAnalysis;
}

/// Compares the space around the subject.
pub trait MarginAnalyzer: Send + Sync {
    /// Analyzes the current image's margins against the reference.
    fn analyze(
        &self,
        current: &KeypointSet,
        reference: &KeypointSet,
        current_shape: ImageShape,
        reference_shape: ImageShape,
    ) -> MarginAnalysis;
}

/// Legacy whole-image comparator; the pipeline only reads its compression reading.
pub trait LegacyComparator: Send + Sync {
    /// Compares two images on disk.
    fn compare(&self, current_path: &str, reference_path: &str, mode: ComparisonMode)
        -> LegacyComparison;
}
