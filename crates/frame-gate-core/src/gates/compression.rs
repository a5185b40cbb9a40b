//! Compression gate: perspective compression as a proxy for focal length.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    CompressionFeedback, GateEvaluation, GateFeedback, GateKey, IssueTag, LensType,
};

use super::{Gate, GateContext};

#[allow(clippy::expect_used)]
static PAREN_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9.]+)\)").expect("compression pattern is valid"));

/// Score when the compression reading is missing or unparsable.
const NEUTRAL_SCORE: f64 = 80.0;

/// Differences below this count as a match.
const MATCH_TOLERANCE: f64 = 0.05;

/// Direction of the mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensShift {
    /// The current image is wider than the reference.
    Wider,
    /// The current image is more compressed than the reference.
    Tighter,
}

/// Magnitude of the mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftTier {
    /// Below 0.15.
    Slight,
    /// 0.15 to 0.3.
    Moderate,
    /// 0.3 and up.
    Large,
}

impl ShiftTier {
    /// Tier for an absolute compression difference.
    #[must_use]
    pub fn of(diff: f64) -> Self {
        if diff < 0.15 {
            Self::Slight
        } else if diff < 0.3 {
            Self::Moderate
        } else {
            Self::Large
        }
    }
}

/// Extracts the number in parentheses from a reading such as `"normal (0.52)"`.
#[must_use]
pub fn parse_compression(text: &str) -> Option<f64> {
    PAREN_NUMBER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Score for an absolute compression difference.
///
/// 95 below 0.05, then three linear segments that meet at 0.2 and 0.4,
/// floored at 50.
#[must_use]
pub fn compression_score(diff: f64) -> f64 {
    if diff < MATCH_TOLERANCE {
        95.0
    } else if diff < 0.2 {
        95.0 - (diff - 0.05) * 100.0
    } else if diff < 0.4 {
        80.0 - (diff - 0.2) * 75.0
    } else {
        (65.0 - (diff - 0.4) * 50.0).max(50.0)
    }
}

/// Compares the lens compression readings of the legacy comparator.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompressionGate;

impl Gate for CompressionGate {
    fn key(&self) -> GateKey {
        GateKey::Compression
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation {
        let Some(reading) = &ctx.legacy.compression else {
            tracing::debug!("legacy comparison has no compression reading");
            return GateEvaluation::scored(NEUTRAL_SCORE, GateFeedback::None);
        };
        let (Some(current), Some(target)) = (
            parse_compression(&reading.current),
            parse_compression(&reading.reference),
        ) else {
            tracing::warn!(
                current = %reading.current,
                reference = %reading.reference,
                "unparsable compression reading"
            );
            return GateEvaluation::scored(NEUTRAL_SCORE, GateFeedback::None);
        };

        let diff = (target - current).abs();
        if diff < MATCH_TOLERANCE {
            return GateEvaluation::scored(compression_score(diff), GateFeedback::None);
        }

        let messages = ctx.messages;
        let current_lens = LensType::classify(current);
        let target_lens = LensType::classify(target);
        let current_lens_name = messages.lens_name(current_lens);
        let target_lens_name = messages.lens_name(target_lens);
        let shift = if current < target {
            LensShift::Wider
        } else {
            LensShift::Tighter
        };
        let adjustment = messages.compression_adjustment(
            shift,
            ShiftTier::of(diff),
            current_lens_name,
            target_lens_name,
        );

        GateEvaluation::scored(
            compression_score(diff),
            GateFeedback::Compression(CompressionFeedback {
                issue: IssueTag::CompressionMismatch,
                current_compression: current,
                target_compression: target,
                current_lens,
                target_lens,
                current_lens_name: current_lens_name.to_string(),
                target_lens_name: target_lens_name.to_string(),
                adjustment: adjustment.to_vec(),
                device: ctx.device.name.clone(),
                zoom_steps: ctx.device.zoom_steps.clone(),
            }),
        )
    }
}
