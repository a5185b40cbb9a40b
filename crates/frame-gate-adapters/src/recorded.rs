//! Framing, margin and compression results recorded ahead of time.
//!
//! The analyzers behind these ports live outside this workspace. Their
//! output for one image pair is captured in a single JSON document:
//!
//! ```json
//! {
//!   "framing": { "shot_type": { ... }, "subject_ratio": { ... } },
//!   "margins": { "overall_score": 88.0, ... },
//!   "legacy": { "compression": { "current": "normal (0.50)", "reference": "normal (0.53)" } }
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frame_gate_core::domain::{
    ComparisonMode, FramingAnalysis, ImageShape, KeypointSet, LegacyComparison, MarginAnalysis,
};
use frame_gate_core::{FramingAnalyzer, LegacyComparator, MarginAnalyzer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Suffix appended to the current image's stem to find its analysis file.
pub const ANALYSIS_SUFFIX: &str = ".analysis.json";

/// Default analysis file for a current image.
#[must_use]
pub fn analysis_path(current: &Path) -> PathBuf {
    let stem = current
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    current.with_file_name(format!("{stem}{ANALYSIS_SUFFIX}"))
}

/// Replays recorded analyzer output.
///
/// Cloning is cheap enough to hand one copy to each port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedAnalysis {
    /// Shot type and subject size comparison.
    pub framing: FramingAnalysis,
    /// Margin comparison.
    pub margins: MarginAnalysis,
    /// Lens/compression estimate; may be empty.
    #[serde(default)]
    pub legacy: LegacyComparison,
}

impl RecordedAnalysis {
    /// Loads a recorded analysis from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read analysis: {}", path.display()))?;
        let analysis: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid analysis JSON: {}", path.display()))?;
        debug!(
            path = %path.display(),
            has_compression = analysis.legacy.compression.is_some(),
            "loaded recorded analysis"
        );
        Ok(analysis)
    }
}

impl FramingAnalyzer for RecordedAnalysis {
    fn analyze(
        &self,
        _current: &KeypointSet,
        _reference: &KeypointSet,
        _current_shape: ImageShape,
        _reference_shape: ImageShape,
    ) -> FramingAnalysis {
        self.framing.clone()
    }
}

impl MarginAnalyzer for RecordedAnalysis {
    fn analyze(
        &self,
        _current: &KeypointSet,
        _reference: &KeypointSet,
        _current_shape: ImageShape,
        _reference_shape: ImageShape,
    ) -> MarginAnalysis {
        self.margins.clone()
    }
}

impl LegacyComparator for RecordedAnalysis {
    fn compare(
        &self,
        _current_path: &str,
        _reference_path: &str,
        _mode: ComparisonMode,
    ) -> LegacyComparison {
        self.legacy.clone()
    }
}
