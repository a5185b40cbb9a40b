//! Aspect ratio gate.

use crate::domain::{AspectFeedback, GateEvaluation, GateFeedback, GateKey, IssueTag};

use super::{Gate, GateContext};

/// Ratios closer than this are considered equal, and snap to a named bucket.
const RATIO_TOLERANCE: f64 = 0.1;

/// Lowest score a ratio mismatch can get.
const MIN_SCORE: f64 = 30.0;

/// Named aspect ratio buckets, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioBucket {
    /// 1:1.
    Square,
    /// 4:3.
    FourThree,
    /// 3:2.
    ThreeTwo,
    /// 16:9.
    SixteenNine,
    /// 3:4.
    ThreeFour,
    /// 2:3.
    TwoThree,
    /// 9:16.
    NineSixteen,
    /// Unnamed ratio above 1.
    Landscape(f64),
    /// Unnamed ratio of 1 or below.
    Portrait(f64),
}

impl RatioBucket {
    const CANONICAL: [(f64, Self); 7] = [
        (1.0, Self::Square),
        (1.33, Self::FourThree),
        (1.5, Self::ThreeTwo),
        (1.78, Self::SixteenNine),
        (0.75, Self::ThreeFour),
        (0.67, Self::TwoThree),
        (0.56, Self::NineSixteen),
    ];

    /// Buckets a width/height ratio. The first canonical ratio within tolerance wins.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        Self::CANONICAL
            .iter()
            .find(|(canonical, _)| (ratio - canonical).abs() < RATIO_TOLERANCE)
            .map_or_else(
                || {
                    if ratio > 1.0 {
                        Self::Landscape(ratio)
                    } else {
                        Self::Portrait(ratio)
                    }
                },
                |(_, bucket)| *bucket,
            )
    }
}

/// Score for a given ratio difference: 100 within tolerance, then linear decay floored at 30.
#[must_use]
pub fn aspect_ratio_score(diff: f64) -> f64 {
    if diff < RATIO_TOLERANCE {
        100.0
    } else {
        (100.0 - diff * 100.0).max(MIN_SCORE)
    }
}

/// Compares width/height ratios of the two images.
#[derive(Debug, Default, Clone, Copy)]
pub struct AspectRatioGate;

impl Gate for AspectRatioGate {
    fn key(&self) -> GateKey {
        GateKey::AspectRatio
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation {
        let messages = ctx.messages;
        let current_ratio = ctx.current_shape.ratio();
        let target_ratio = ctx.reference_shape.ratio();
        let current_name = messages.ratio_label(RatioBucket::classify(current_ratio));
        let target_name = messages.ratio_label(RatioBucket::classify(target_ratio));

        let diff = (current_ratio - target_ratio).abs();
        let passed = diff < RATIO_TOLERANCE;
        let action = if passed {
            messages.aspect_matches()
        } else {
            messages.aspect_switch_to(&target_name)
        };

        let feedback = AspectFeedback {
            passed,
            diff,
            current_ratio,
            target_ratio,
            current_name,
            target_name,
            current_dims: ctx.current_shape.dims(),
            target_dims: ctx.reference_shape.dims(),
            action,
            issue: (!passed).then_some(IssueTag::AspectRatioMismatch),
        };

        GateEvaluation::scored(aspect_ratio_score(diff), GateFeedback::AspectRatio(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageShape;
    use crate::gates::testing::Fixture;

    fn evaluate(current: (u32, u32), reference: (u32, u32)) -> (f64, AspectFeedback) {
        let fixture = Fixture::new(
            ImageShape::new(current.0, current.1),
            ImageShape::new(reference.0, reference.1),
        );
        let evaluation = AspectRatioGate.evaluate(&fixture.ctx());
        match evaluation.feedback {
            GateFeedback::AspectRatio(fb) => (evaluation.score.unwrap_or_default(), fb),
            other => panic!("unexpected feedback: {other:?}"),
        }
    }

    #[test]
    fn test_matching_ratio_keeps_display_fields() {
        let (score, fb) = evaluate((1080, 1920), (1080, 1920));
        assert!((score - 100.0).abs() < f64::EPSILON);
        assert!(fb.passed);
        assert!(fb.issue.is_none());
        assert_eq!(fb.current_dims, [1080, 1920]);
        assert_eq!(fb.target_dims, [1080, 1920]);
        assert_eq!(fb.current_name, "9:16 (portrait wide)");
        assert_eq!(fb.action, "Aspect ratio matches");
    }

    #[test]
    fn test_landscape_vs_portrait_floors_at_30() {
        let (score, fb) = evaluate((1920, 1080), (1080, 1920));
        assert!((score - 30.0).abs() < f64::EPSILON);
        assert!(!fb.passed);
        assert_eq!(fb.issue, Some(IssueTag::AspectRatioMismatch));
        assert_eq!(fb.current_name, "16:9 (landscape wide)");
        assert_eq!(fb.target_name, "9:16 (portrait wide)");
        assert_eq!(fb.action, "Switch the camera ratio to 9:16 (portrait wide)");
        assert!((fb.diff - 1.2222).abs() < 1e-3);
    }

    #[test]
    fn test_moderate_mismatch_decays_linearly() {
        // 4:3 vs 1:1 -> diff 0.333
        let (score, _) = evaluate((1200, 900), (1000, 1000));
        assert!((score - (100.0 - 100.0 / 3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_bucket_order_and_fallback() {
        assert_eq!(RatioBucket::classify(1.0), RatioBucket::Square);
        assert_eq!(RatioBucket::classify(1.25), RatioBucket::FourThree);
        assert_eq!(RatioBucket::classify(1.42), RatioBucket::FourThree);
        assert_eq!(RatioBucket::classify(1.5), RatioBucket::ThreeTwo);
        assert_eq!(RatioBucket::classify(0.5625), RatioBucket::NineSixteen);
        assert_eq!(RatioBucket::classify(0.6), RatioBucket::TwoThree);
        assert_eq!(RatioBucket::classify(2.5), RatioBucket::Landscape(2.5));
        assert_eq!(RatioBucket::classify(0.4), RatioBucket::Portrait(0.4));
    }

    #[test]
    fn test_score_boundaries() {
        assert!((aspect_ratio_score(0.099) - 100.0).abs() < f64::EPSILON);
        assert!((aspect_ratio_score(0.1) - 90.0).abs() < 1e-9);
        assert!((aspect_ratio_score(5.0) - 30.0).abs() < f64::EPSILON);
    }
}
