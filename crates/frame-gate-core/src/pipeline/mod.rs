//! Gate orchestration.
//!
//! [`GatePipeline::run`] walks the gates in [`GateKey::ORDER`], judges each
//! score against its threshold and stops or continues according to the
//! [`ExecutionPolicy`]. The loop yields a [`Progress`] value and a single
//! builder turns it into the [`GateRunResult`].

mod critical;
mod session;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::GateConfig;
use crate::domain::{
    CriticalFeedback, ExecutionPolicy, GateFeedback, GateKey, GateOutcome, GateRunResult,
    ImageShape, KeypointSet, LegacyComparison, PoseSuggestion, RunStatus,
};
use crate::gates::{
    AspectRatioGate, CompositionGate, CompressionGate, FramingGate, Gate, GateContext, PoseGate,
};
use crate::ports::{FramingAnalyzer, MarginAnalyzer};
use crate::summary;
use crate::text::Messages;

pub use session::GateSession;

/// Inputs of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct GateInput {
    /// Keypoints of the current image.
    pub current: KeypointSet,
    /// Keypoints of the reference image.
    pub reference: KeypointSet,
    /// Shape of the current image.
    pub current_shape: ImageShape,
    /// Shape of the reference image.
    pub reference_shape: ImageShape,
    /// Legacy comparator output.
    pub legacy: LegacyComparison,
    /// Device name, resolved against the configured catalog.
    pub device: String,
}

impl GateInput {
    /// Input with no detected subjects, no compression reading and the generic device.
    #[must_use]
    pub fn new(current_shape: ImageShape, reference_shape: ImageShape) -> Self {
        Self {
            current: KeypointSet::empty(),
            reference: KeypointSet::empty(),
            current_shape,
            reference_shape,
            legacy: LegacyComparison::default(),
            device: "generic".into(),
        }
    }

    /// Sets both keypoint sets.
    #[must_use]
    pub fn with_keypoints(mut self, current: KeypointSet, reference: KeypointSet) -> Self {
        self.current = current;
        self.reference = reference;
        self
    }

    /// Sets the legacy comparison.
    #[must_use]
    pub fn with_legacy(mut self, legacy: LegacyComparison) -> Self {
        self.legacy = legacy;
        self
    }

    /// Sets the device name.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }
}

/// Where the gate loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Progress {
    /// Stopped at a failing gate; its score stands in for the overall score.
    Blocked { gate: GateKey, level: u8, score: f64 },
    /// Every gate ran. `first_failure` is only ever set in evaluate-all mode.
    Completed { first_failure: Option<GateKey> },
}

/// The five gates with their static configuration.
pub struct GatePipeline {
    gates: Vec<Box<dyn Gate>>,
    config: GateConfig,
    messages: Messages,
}

impl GatePipeline {
    /// Builds the pipeline with the framing gate's two collaborators.
    #[must_use]
    pub fn new(
        config: GateConfig,
        framing: Box<dyn FramingAnalyzer>,
        margins: Box<dyn MarginAnalyzer>,
    ) -> Self {
        let gates: Vec<Box<dyn Gate>> = vec![
            Box::new(AspectRatioGate),
            Box::new(FramingGate::new(framing, margins)),
            Box::new(CompositionGate),
            Box::new(CompressionGate),
            Box::new(PoseGate),
        ];
        debug_assert!(gates.iter().map(|g| g.key()).eq(GateKey::ORDER));

        let messages = Messages::new(config.language);
        Self {
            gates,
            config,
            messages,
        }
    }

    /// The pipeline's configuration.
    #[must_use]
    pub const fn config(&self) -> &GateConfig {
        &self.config
    }

    /// The pipeline's message catalog.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Runs the gates and builds the result. Never fails.
    #[must_use]
    pub fn run(&self, input: &GateInput, policy: ExecutionPolicy) -> GateRunResult {
        let device = self.config.devices.resolve(&input.device);
        let ctx = GateContext {
            current: &input.current,
            reference: &input.reference,
            current_shape: input.current_shape,
            reference_shape: input.reference_shape,
            legacy: &input.legacy,
            device,
            messages: &self.messages,
        };

        info!(?policy, device = %device.name, "running gates");

        let mut results = BTreeMap::new();
        let mut gates_passed = Vec::new();
        let mut critical: Option<CriticalFeedback> = None;
        let mut progress = Progress::Completed {
            first_failure: None,
        };

        for gate in &self.gates {
            let key = gate.key();
            let outcome = GateOutcome::judge(
                gate.evaluate(&ctx),
                self.config.thresholds.for_gate(key),
            );
            debug!(
                gate = %key,
                score = ?outcome.score,
                threshold = ?outcome.threshold,
                passed = outcome.passed,
                "gate evaluated"
            );

            let failed_score = (!outcome.passed && key.is_blocking())
                .then(|| outcome.score.unwrap_or_default());

            if outcome.passed {
                gates_passed.push(key);
            }
            if let Some(score) = failed_score {
                if critical.is_none() {
                    critical = Some(critical::critical_feedback(
                        key,
                        &outcome.feedback,
                        &self.messages,
                    ));
                }
                match (policy, progress) {
                    (ExecutionPolicy::StopOnFail, _) => {
                        progress = Progress::Blocked {
                            gate: key,
                            level: key.index(),
                            score,
                        };
                    }
                    (
                        ExecutionPolicy::EvaluateAll,
                        Progress::Completed {
                            first_failure: None,
                        },
                    ) => {
                        progress = Progress::Completed {
                            first_failure: Some(key),
                        };
                    }
                    (ExecutionPolicy::EvaluateAll, _) => {}
                }
            }
            results.insert(key, outcome);

            if matches!(progress, Progress::Blocked { .. }) {
                break;
            }
        }

        let result = self.build_result(progress, results, gates_passed, critical);
        info!(
            status = ?result.status,
            gate_level = result.gate_level,
            overall_score = result.overall_score,
            "gate run finished"
        );
        result
    }

    fn build_result(
        &self,
        progress: Progress,
        results: BTreeMap<GateKey, GateOutcome>,
        gates_passed: Vec<GateKey>,
        critical: Option<CriticalFeedback>,
    ) -> GateRunResult {
        // A completed run is ALL_GATES_PASSED even when evaluate-all recorded
        // a first failure; that failure stays in blocked_at and critical.
        let (gate_level, status, blocked_at, overall_score) = match progress {
            Progress::Blocked { gate, level, score } => (
                level,
                gate.blocked_status().unwrap_or(RunStatus::AllGatesPassed),
                Some(gate),
                score,
            ),
            Progress::Completed { first_failure } => (
                GateKey::Pose.index(),
                RunStatus::AllGatesPassed,
                first_failure,
                summary::overall_score(&results),
            ),
        };

        let pose_suggestions: Vec<PoseSuggestion> = match results.get(&GateKey::Pose) {
            Some(GateOutcome {
                feedback: GateFeedback::Pose(fb),
                ..
            }) => fb.suggestions.clone(),
            _ => Vec::new(),
        };

        GateRunResult {
            gate_level,
            status,
            message: summary::status_message(status, &self.messages),
            friendly_summary: summary::friendly_summary(
                status,
                overall_score,
                critical.as_ref(),
                &gates_passed,
                &self.messages,
            ),
            summary: summary::gate_table(&results, &self.messages),
            gates_passed,
            gates_results: results,
            blocked_at,
            critical_feedback: critical,
            overall_score,
            pose_suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ActionableFeedback, AxisVerdict, FramingAnalysis, MarginAnalysis, Margins, ShotType,
        ShotTypeComparison, SubjectRatio, VerticalVerdict,
    };

    struct Framing(f64);

    impl FramingAnalyzer for Framing {
        fn analyze(
            &self,
            _: &KeypointSet,
            _: &KeypointSet,
            _: ImageShape,
            _: ImageShape,
        ) -> FramingAnalysis {
            FramingAnalysis {
                shot_type: ShotTypeComparison {
                    current: ShotType::new("medium_shot", ""),
                    reference: ShotType::new("medium_shot", ""),
                    score: self.0,
                    same_category: true,
                },
                subject_ratio: SubjectRatio {
                    current_ratio: 0.3,
                    reference_ratio: 0.3,
                    score: self.0,
                    action: None,
                },
            }
        }
    }

    struct Margin(f64);

    impl MarginAnalyzer for Margin {
        fn analyze(
            &self,
            _: &KeypointSet,
            _: &KeypointSet,
            _: ImageShape,
            _: ImageShape,
        ) -> MarginAnalysis {
            MarginAnalysis {
                current_margins: Margins::default(),
                reference_margins: Margins::default(),
                horizontal: AxisVerdict {
                    status: "balanced".into(),
                    score: self.0,
                },
                vertical: VerticalVerdict {
                    status: "balanced".into(),
                    score: self.0,
                    adjustment: None,
                },
                overall_score: self.0,
                actionable_feedback: ActionableFeedback::default(),
            }
        }
    }

    fn pipeline(framing_score: f64) -> GatePipeline {
        GatePipeline::new(
            GateConfig::default(),
            Box::new(Framing(framing_score)),
            Box::new(Margin(framing_score)),
        )
    }

    #[test]
    fn test_stop_on_fail_at_aspect_ratio() {
        let input = GateInput::new(ImageShape::new(1920, 1080), ImageShape::new(1080, 1920));
        let result = pipeline(90.0).run(&input, ExecutionPolicy::StopOnFail);

        assert_eq!(result.status, RunStatus::BlockedAtAspectRatio);
        assert_eq!(result.gate_level, 0);
        assert_eq!(result.blocked_at, Some(GateKey::AspectRatio));
        assert_eq!(result.gates_results.len(), 1);
        assert!((result.overall_score - 30.0).abs() < f64::EPSILON);
        assert!(result.gates_passed.is_empty());
        assert!(result.summary.contains("[!!] Aspect ratio: 30"));
    }

    #[test]
    fn test_blocked_score_overrides_mean() {
        let input = GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920));
        let result = pipeline(50.0).run(&input, ExecutionPolicy::StopOnFail);

        assert_eq!(result.status, RunStatus::BlockedAtFraming);
        assert_eq!(result.gate_level, 1);
        assert!((result.overall_score - 50.0).abs() < 1e-9);
        assert_eq!(result.gates_passed, vec![GateKey::AspectRatio]);
    }

    #[test]
    fn test_evaluate_all_runs_every_gate() {
        let input = GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920));
        let result = pipeline(50.0).run(&input, ExecutionPolicy::EvaluateAll);

        assert_eq!(result.gates_results.len(), 5);
        assert_eq!(result.gate_level, 4);
        assert_eq!(result.status, RunStatus::AllGatesPassed);
        assert_eq!(result.blocked_at, Some(GateKey::Framing));
        assert_eq!(
            result.critical_feedback.as_ref().map(|c| c.gate),
            Some(GateKey::Framing)
        );
        assert!(!result.gates_passed.contains(&GateKey::Framing));
        // (100 + 50 + 75 + 80) / 4
        assert!((result.overall_score - 76.25).abs() < 1e-9);
        assert_eq!(result.message, "Everything matches the reference!");
        assert_eq!(
            result.friendly_summary,
            "Generally well aligned with the reference."
        );
    }

    #[test]
    fn test_compression_block_carries_device_profile() {
        let input = GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920))
            .with_legacy(LegacyComparison::with_compression("(0.20)", "(0.80)"))
            .with_device("galaxy");
        let result = pipeline(90.0).run(&input, ExecutionPolicy::StopOnFail);

        assert_eq!(result.status, RunStatus::BlockedAtCompression);
        assert_eq!(result.gate_level, 3);
        let Some(GateOutcome {
            feedback: GateFeedback::Compression(fb),
            ..
        }) = result.outcome(GateKey::Compression)
        else {
            panic!("expected compression feedback");
        };
        assert_eq!(fb.device, "Galaxy");
        assert_eq!(fb.zoom_steps, vec![0.6, 1.0, 3.0, 10.0]);
    }

    #[test]
    fn test_neutral_scores_pass_by_default() {
        let input = GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920));
        let result = pipeline(90.0).run(&input, ExecutionPolicy::StopOnFail);

        assert_eq!(result.status, RunStatus::AllGatesPassed);
        assert_eq!(result.gate_level, 4);
        assert!(result.blocked_at.is_none());
        assert!(result.critical_feedback.is_none());
        assert_eq!(result.gates_passed.len(), 5);
        assert_eq!(result.message, "Everything matches the reference!");
    }
}
