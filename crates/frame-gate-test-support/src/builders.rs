//! Builders for keypoints, collaborator results and synthetic images.

use frame_gate_core::domain::{
    ActionableFeedback, AxisVerdict, FramingAnalysis, ImageInfo, Keypoint, KeypointSet,
    MarginAnalysis, Margins, PrimaryAction, ShotType, ShotTypeComparison, SubjectRatio,
    VerticalVerdict,
};
use image::{DynamicImage, Rgb, RgbImage};

/// Builder for [`KeypointSet`] values in pixel coordinates.
///
/// Starts with one detected person and no keypoints.
#[derive(Debug, Clone)]
pub struct KeypointSetBuilder {
    set: KeypointSet,
}

impl KeypointSetBuilder {
    /// A single person with no keypoints yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            set: KeypointSet {
                num_persons: 1,
                ..KeypointSet::default()
            },
        }
    }

    /// Overrides the detected person count.
    #[must_use]
    pub const fn persons(mut self, count: u32) -> Self {
        self.set.num_persons = count;
        self
    }

    /// Adds a named body joint.
    #[must_use]
    pub fn body(mut self, name: &str, x: f64, y: f64) -> Self {
        self.set
            .body_keypoints
            .insert(name.to_string(), Keypoint::new(x, y));
        self
    }

    /// Adds the nose keypoint.
    #[must_use]
    pub fn nose(self, x: f64, y: f64) -> Self {
        self.body("nose", x, y)
    }

    /// Adds both shoulders.
    #[must_use]
    pub fn shoulders(self, left: (f64, f64), right: (f64, f64)) -> Self {
        self.body("left_shoulder", left.0, left.1)
            .body("right_shoulder", right.0, right.1)
    }

    /// Adds `count` face landmarks whose mean is `(x, y)`.
    ///
    /// Points alternate a few pixels either side of the center; an odd count
    /// puts the last one exactly on it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn face(mut self, x: f64, y: f64, count: usize) -> Self {
        let pairs = count / 2;
        for i in 0..pairs {
            let offset = (i % 5 + 1) as f64;
            self.set
                .face_landmarks
                .insert(format!("face_{:03}", 2 * i), Keypoint::new(x - offset, y + offset));
            self.set
                .face_landmarks
                .insert(format!("face_{:03}", 2 * i + 1), Keypoint::new(x + offset, y - offset));
        }
        if count % 2 == 1 {
            self.set
                .face_landmarks
                .insert(format!("face_{:03}", count - 1), Keypoint::new(x, y));
        }
        self
    }

    /// Finishes the set.
    #[must_use]
    pub fn build(self) -> KeypointSet {
        self.set
    }
}

impl Default for KeypointSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Ready-made framing and margin analyzer results.
pub struct CollaboratorFixtures;

impl CollaboratorFixtures {
    // === Framing ===

    /// Same shot type, both sub-scores equal to `score`, no subject action.
    #[must_use]
    pub fn framing_matched(score: f64) -> FramingAnalysis {
        FramingAnalysis {
            shot_type: ShotTypeComparison {
                current: ShotType::new("medium_shot", "Medium shot"),
                reference: ShotType::new("medium_shot", "Medium shot"),
                score,
                same_category: true,
            },
            subject_ratio: SubjectRatio {
                current_ratio: 0.35,
                reference_ratio: 0.35,
                score,
                action: None,
            },
        }
    }

    /// Different shot types with a subject-size action.
    #[must_use]
    pub fn framing_mismatched(shot_score: f64, subject_score: f64) -> FramingAnalysis {
        FramingAnalysis {
            shot_type: ShotTypeComparison {
                current: ShotType::new("close_up", "Close-up"),
                reference: ShotType::new("full_shot", "Full shot"),
                score: shot_score,
                same_category: false,
            },
            subject_ratio: SubjectRatio {
                current_ratio: 0.6,
                reference_ratio: 0.25,
                score: subject_score,
                action: Some("Step back to make the subject smaller".into()),
            },
        }
    }

    // === Margins ===

    /// Balanced margins scoring `score`, no issues.
    #[must_use]
    pub fn margins_balanced(score: f64) -> MarginAnalysis {
        Self::margins(score, ActionableFeedback::default())
    }

    /// Unbalanced margins scoring `score`, with a camera instruction.
    #[must_use]
    pub fn margins_with_action(score: f64, camera: &str) -> MarginAnalysis {
        Self::margins(
            score,
            ActionableFeedback {
                has_issues: true,
                primary_action: Some(PrimaryAction {
                    camera: Some(camera.to_string()),
                }),
            },
        )
    }

    fn margins(score: f64, actionable_feedback: ActionableFeedback) -> MarginAnalysis {
        let even = Margins {
            left: 0.2,
            right: 0.2,
            top: 0.1,
            bottom: 0.1,
        };
        let status = if actionable_feedback.has_issues {
            "unbalanced"
        } else {
            "balanced"
        };
        MarginAnalysis {
            current_margins: even,
            reference_margins: even,
            horizontal: AxisVerdict {
                status: status.into(),
                score,
            },
            vertical: VerticalVerdict {
                status: status.into(),
                score,
                adjustment: None,
            },
            overall_score: score,
            actionable_feedback,
        }
    }
}

/// Builder for synthetic decoded images.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// A flat gray RGB image of the given size.
    #[must_use]
    pub fn blank(path: &str, width: u32, height: u32) -> ImageInfo {
        let img = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
        ImageInfo::new(path, DynamicImage::ImageRgb8(img))
    }
}
