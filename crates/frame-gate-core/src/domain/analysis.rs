//! Results handed back by the external sub-analyzers.
//!
//! The gates only consume the scalar scores and action strings carried here;
//! how the collaborators compute them is their own business.

use serde::{Deserialize, Serialize};

/// Output of the framing analyzer: shot type and subject size comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingAnalysis {
    /// Shot type classification for both images.
    pub shot_type: ShotTypeComparison,
    /// How much of the frame the subject occupies in each image.
    pub subject_ratio: SubjectRatio,
}

/// Shot type of the current image against the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotTypeComparison {
    /// Shot type of the current image.
    pub current: ShotType,
    /// Shot type of the reference image.
    pub reference: ShotType,
    /// Similarity score (0-100).
    pub score: f64,
    /// Whether both shots fall in the same category.
    pub same_category: bool,
}

/// A categorical framing classification such as close-up or full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotType {
    /// Machine-readable category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name, if the analyzer provides one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl ShotType {
    /// Creates a shot type with a display name.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Display name, falling back to the category.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.kind
        } else {
            &self.name
        }
    }
}

/// Subject-size comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRatio {
    /// Fraction of the current frame covered by the subject.
    pub current_ratio: f64,
    /// Fraction of the reference frame covered by the subject.
    pub reference_ratio: f64,
    /// Similarity score (0-100).
    pub score: f64,
    /// Suggested adjustment, when the sizes differ enough to matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Output of the margin analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginAnalysis {
    /// Margins around the subject in the current image.
    pub current_margins: Margins,
    /// Margins around the subject in the reference image.
    pub reference_margins: Margins,
    /// Left/right balance verdict.
    pub horizontal: AxisVerdict,
    /// Top/bottom balance verdict.
    pub vertical: VerticalVerdict,
    /// Combined margin score (0-100).
    pub overall_score: f64,
    /// Summary of what the user should change.
    #[serde(default)]
    pub actionable_feedback: ActionableFeedback,
}

impl MarginAnalysis {
    /// The camera instruction the analyzer considers most important, if it flags an issue.
    #[must_use]
    pub fn camera_action(&self) -> Option<&str> {
        if !self.actionable_feedback.has_issues {
            return None;
        }
        self.actionable_feedback
            .primary_action
            .as_ref()
            .and_then(|a| a.camera.as_deref())
    }
}

/// Margins as fractions of the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Space left of the subject.
    pub left: f64,
    /// Space right of the subject.
    pub right: f64,
    /// Space above the subject.
    pub top: f64,
    /// Space below the subject.
    pub bottom: f64,
}

/// Verdict for one margin axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisVerdict {
    /// Free-form status label.
    pub status: String,
    /// Axis score (0-100).
    pub score: f64,
}

/// Verdict for the vertical axis, with the analyzer's adjustment payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalVerdict {
    /// Free-form status label.
    pub status: String,
    /// Axis score (0-100).
    pub score: f64,
    /// Opaque adjustment details, passed through for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<serde_json::Value>,
}

/// What the margin analyzer wants changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionableFeedback {
    /// Whether any margin issue was found.
    pub has_issues: bool,
    /// The most important adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<PrimaryAction>,
}

/// A single recommended adjustment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryAction {
    /// Instruction for moving the camera.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
}

/// How thoroughly the legacy comparator should work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Fast comparison without per-aspect feedback.
    Quick,
    /// Full comparison including the compression reading.
    #[default]
    Detailed,
}

/// Output of the legacy lens/compression comparator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyComparison {
    /// Compression reading, absent when the comparator could not estimate it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<CompressionReading>,
}

impl LegacyComparison {
    /// A comparison carrying a compression reading.
    #[must_use]
    pub fn with_compression(current: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            compression: Some(CompressionReading {
                current: current.into(),
                reference: reference.into(),
            }),
        }
    }
}

/// Formatted compression text for both images, e.g. `"normal (0.52)"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionReading {
    /// Text describing the current image.
    pub current: String,
    /// Text describing the reference image.
    pub reference: String,
}
