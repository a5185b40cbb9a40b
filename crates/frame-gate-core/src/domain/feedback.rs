//! Structured feedback produced by the gates.

use serde::{Deserialize, Serialize};

use super::{GateKey, MarginAnalysis, ShotTypeComparison, SubjectRatio};

/// Gate-specific feedback payload.
///
/// Serialized with a `kind` tag, so consumers always get an object and can
/// switch on `kind` instead of probing for fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateFeedback {
    /// Nothing to report (match, or nothing could be evaluated).
    None,
    /// Aspect ratio comparison.
    AspectRatio(AspectFeedback),
    /// Framing comparison.
    Framing(FramingFeedback),
    /// Subject position mismatch.
    Composition(CompositionFeedback),
    /// Lens compression mismatch.
    Compression(CompressionFeedback),
    /// Posture suggestions.
    Pose(PoseFeedback),
}

impl GateFeedback {
    /// Whether this payload carries nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Machine-readable issue tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueTag {
    /// Aspect ratios differ.
    AspectRatioMismatch,
    /// Subject sits in a different grid cell.
    PositionMismatch,
    /// Lens compression differs.
    CompressionMismatch,
}

/// Aspect ratio feedback. Always populated, pass or fail, since the
/// dimensions and labels are displayed unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectFeedback {
    /// Whether the ratios match within tolerance.
    pub passed: bool,
    /// Absolute ratio difference.
    pub diff: f64,
    /// Width/height of the current image.
    pub current_ratio: f64,
    /// Width/height of the reference image.
    pub target_ratio: f64,
    /// Label for the current ratio, e.g. `16:9 (landscape wide)`.
    pub current_name: String,
    /// Label for the reference ratio.
    pub target_name: String,
    /// `[width, height]` of the current image.
    pub current_dims: [u32; 2],
    /// `[width, height]` of the reference image.
    pub target_dims: [u32; 2],
    /// What the user should do.
    pub action: String,
    /// Set only on mismatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueTag>,
}

/// Framing sub-issues, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingIssue {
    /// Shot categories differ.
    ShotTypeMismatch,
    /// Subject size differs.
    SubjectRatio,
    /// Margins are unbalanced compared to the reference.
    MarginImbalance,
}

/// How far off the framing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Fine-tuning.
    Minor,
    /// Shot type itself is wrong.
    Major,
}

/// Framing feedback, including the collaborator payloads it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingFeedback {
    /// Issues found, in priority order.
    pub issues: Vec<FramingIssue>,
    /// Up to three actions.
    pub actions: Vec<String>,
    /// One-line summary.
    pub summary: String,
    /// Overall severity.
    pub severity: Severity,
    /// Shot type sub-score.
    pub shot_score: f64,
    /// Subject size sub-score.
    pub subject_score: f64,
    /// Margin sub-score.
    pub margin_score: f64,
    /// Shot type comparison from the framing analyzer.
    pub shot_type: ShotTypeComparison,
    /// Subject size comparison from the framing analyzer.
    pub subject_ratio: SubjectRatio,
    /// Margin analysis.
    pub margins: MarginAnalysis,
}

/// A cell in the 3x3 rule-of-thirds grid, 1-based `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell(pub u8, pub u8);

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Composition mismatch details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionFeedback {
    /// Always [`IssueTag::PositionMismatch`].
    pub issue: IssueTag,
    /// Normalized face center in the current image.
    pub current_center: [f64; 2],
    /// Normalized face center in the reference image.
    pub target_center: [f64; 2],
    /// Grid cell of the current face.
    pub current_grid: GridCell,
    /// Grid cell of the reference face.
    pub target_grid: GridCell,
    /// Euclidean distance between the centers.
    pub distance: f64,
}

/// Lens character inferred from a compression value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LensType {
    /// Below 0.3.
    Wide,
    /// 0.3 to 0.45.
    SemiWide,
    /// 0.45 to 0.6.
    Normal,
    /// 0.6 to 0.75.
    MediumTele,
    /// 0.75 and up.
    Telephoto,
}

impl LensType {
    /// Classifies a compression value.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value < 0.3 {
            Self::Wide
        } else if value < 0.45 {
            Self::SemiWide
        } else if value < 0.6 {
            Self::Normal
        } else if value < 0.75 {
            Self::MediumTele
        } else {
            Self::Telephoto
        }
    }
}

/// Compression mismatch details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionFeedback {
    /// Always [`IssueTag::CompressionMismatch`].
    pub issue: IssueTag,
    /// Compression value of the current image.
    pub current_compression: f64,
    /// Compression value of the reference image.
    pub target_compression: f64,
    /// Lens bucket of the current image.
    pub current_lens: LensType,
    /// Lens bucket of the reference image.
    pub target_lens: LensType,
    /// Display name of the current lens.
    pub current_lens_name: String,
    /// Display name of the reference lens.
    pub target_lens_name: String,
    /// Two-line instruction: what differs, then how to fix it.
    pub adjustment: Vec<String>,
    /// Device the zoom steps belong to.
    pub device: String,
    /// Zoom steps available on that device.
    pub zoom_steps: Vec<f64>,
}

/// A single posture suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseSuggestion {
    /// Suggestion group, e.g. `posture`.
    pub category: String,
    /// Human-readable suggestion.
    pub suggestion: String,
    /// How much it matters, e.g. `optional`.
    pub importance: String,
}

/// Posture suggestions for the current image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseFeedback {
    /// Suggestions, possibly empty.
    pub suggestions: Vec<PoseSuggestion>,
}

/// Priority of a blocking issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nothing else is meaningful until this is fixed.
    Critical,
    /// Should be fixed next.
    High,
    /// Worth fixing.
    Medium,
}

impl Priority {
    /// Priority assigned to a failure at the given gate.
    #[must_use]
    pub const fn for_gate(gate: GateKey) -> Self {
        match gate {
            GateKey::AspectRatio => Self::Critical,
            GateKey::Framing => Self::High,
            GateKey::Composition | GateKey::Compression | GateKey::Pose => Self::Medium,
        }
    }

    /// Lower-case label, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// The one issue the user should address first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalFeedback {
    /// Gate that failed.
    pub gate: GateKey,
    /// Display name of that gate.
    pub gate_name: String,
    /// What is wrong.
    pub issue: String,
    /// Up to three things to do, most important first.
    pub actions: Vec<String>,
    /// How urgent it is.
    pub priority: Priority,
    /// The failing gate's feedback payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<GateFeedback>,
}
