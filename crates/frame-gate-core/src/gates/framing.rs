//! Framing gate.
//!
//! Shot type and subject size come from a [`FramingAnalyzer`], margins from a
//! [`MarginAnalyzer`]. This gate only weighs the three sub-scores and turns
//! the collaborator results into a short list of actions.

use crate::domain::{
    FramingFeedback, FramingIssue, GateEvaluation, GateFeedback, GateKey, Severity,
};
use crate::ports::{FramingAnalyzer, MarginAnalyzer};

use super::{Gate, GateContext};

const SHOT_TYPE_WEIGHT: f64 = 0.25;
const SUBJECT_RATIO_WEIGHT: f64 = 0.35;
const MARGIN_WEIGHT: f64 = 0.40;

/// Upper bound on the number of framing actions reported.
const MAX_ACTIONS: usize = 3;

/// Weighted framing comparison.
pub struct FramingGate {
    framing: Box<dyn FramingAnalyzer>,
    margins: Box<dyn MarginAnalyzer>,
}

impl FramingGate {
    /// Creates the gate around its two collaborators.
    #[must_use]
    pub fn new(framing: Box<dyn FramingAnalyzer>, margins: Box<dyn MarginAnalyzer>) -> Self {
        Self { framing, margins }
    }
}

impl Gate for FramingGate {
    fn key(&self) -> GateKey {
        GateKey::Framing
    }

    fn evaluate(&self, ctx: &GateContext<'_>) -> GateEvaluation {
        let framing = self.framing.analyze(
            ctx.current,
            ctx.reference,
            ctx.current_shape,
            ctx.reference_shape,
        );
        let margins = self.margins.analyze(
            ctx.current,
            ctx.reference,
            ctx.current_shape,
            ctx.reference_shape,
        );

        let shot_score = framing.shot_type.score;
        let subject_score = framing.subject_ratio.score;
        let margin_score = margins.overall_score;
        let score = shot_score * SHOT_TYPE_WEIGHT
            + subject_score * SUBJECT_RATIO_WEIGHT
            + margin_score * MARGIN_WEIGHT;

        let mut issues = Vec::new();
        let mut actions = Vec::new();
        let mut severity = Severity::Minor;

        let shot = &framing.shot_type;
        if !shot.same_category {
            issues.push(FramingIssue::ShotTypeMismatch);
            severity = Severity::Major;
            actions.push(ctx.messages.shot_type_change(
                shot.current.display_name(),
                shot.reference.display_name(),
            ));
        }

        if let Some(action) = &framing.subject_ratio.action {
            issues.push(FramingIssue::SubjectRatio);
            actions.push(action.clone());
        }

        if margins.actionable_feedback.has_issues {
            issues.push(FramingIssue::MarginImbalance);
            if let Some(camera) = margins.camera_action() {
                actions.push(camera.to_string());
            }
        }

        actions.truncate(MAX_ACTIONS);
        let summary = ctx.messages.framing_summary(issues.len()).to_string();

        tracing::trace!(shot_score, subject_score, margin_score, score, "framing sub-scores");

        GateEvaluation::scored(
            score,
            GateFeedback::Framing(FramingFeedback {
                issues,
                actions,
                summary,
                severity,
                shot_score,
                subject_score,
                margin_score,
                shot_type: framing.shot_type,
                subject_ratio: framing.subject_ratio,
                margins,
            }),
        )
    }
}
