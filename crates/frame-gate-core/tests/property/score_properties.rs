use frame_gate_core::domain::{ExecutionPolicy, GateKey, ImageShape, LegacyComparison, RunStatus};
use frame_gate_core::gates::{
    aspect_ratio_score, composition_score, compression_score, grid_position,
};
use frame_gate_core::summary::overall_score;
use frame_gate_core::{GateConfig, GateInput, GatePipeline};
use frame_gate_test_support::{
    CollaboratorFixtures, KeypointSetBuilder, MockFramingAnalyzer, MockMarginAnalyzer,
};
use proptest::prelude::*;

fn pipeline(framing: f64, margins: f64) -> GatePipeline {
    GatePipeline::new(
        GateConfig::default(),
        Box::new(MockFramingAnalyzer::new(CollaboratorFixtures::framing_matched(framing))),
        Box::new(MockMarginAnalyzer::new(CollaboratorFixtures::margins_balanced(margins))),
    )
}

proptest! {
    #[test]
    fn aspect_score_non_increasing_and_floored(a in 0.0f64..5.0, b in 0.0f64..5.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(aspect_ratio_score(lo) >= aspect_ratio_score(hi));
        prop_assert!(aspect_ratio_score(hi) >= 30.0);
        prop_assert!(aspect_ratio_score(lo) <= 100.0);
    }

    #[test]
    fn equal_ratios_score_100(w in 1u32..5000, h in 1u32..5000, scale in 1u32..4) {
        let result = pipeline(90.0, 90.0).run(
            &GateInput::new(ImageShape::new(w, h), ImageShape::new(w * scale, h * scale)),
            ExecutionPolicy::EvaluateAll,
        );
        prop_assert_eq!(result.score(GateKey::AspectRatio), Some(100.0));
    }

    #[test]
    fn composition_score_decreases_with_distance(a in 0.0f64..1.5, b in 0.0f64..1.5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(composition_score(lo) >= composition_score(hi));
        prop_assert!(composition_score(hi) >= 40.0);
        if lo < hi && hi < 0.4 {
            prop_assert!(composition_score(lo) > composition_score(hi));
        }
    }

    #[test]
    fn grid_cells_stay_in_range(x in -1.0f64..2.0, y in -1.0f64..2.0) {
        let cell = grid_position([x, y]);
        prop_assert!((1..=3).contains(&cell.0));
        prop_assert!((1..=3).contains(&cell.1));
    }

    #[test]
    fn compression_score_bounded_and_non_increasing(a in 0.0f64..2.0, b in 0.0f64..2.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compression_score(lo) >= compression_score(hi) - 1e-9);
        prop_assert!(compression_score(hi) >= 50.0);
        prop_assert!(compression_score(lo) <= 95.0);
    }

    #[test]
    fn overall_score_is_mean_of_present_scores(framing in 0.0f64..100.0) {
        let result = pipeline(framing, framing).run(
            &GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920)),
            ExecutionPolicy::EvaluateAll,
        );
        prop_assert!((result.overall_score - overall_score(&result.gates_results)).abs() < 1e-9);
    }

    #[test]
    fn evaluate_all_always_completes(framing in 0.0f64..100.0, width in 500u32..3000) {
        let result = pipeline(framing, framing).run(
            &GateInput::new(ImageShape::new(width, 1920), ImageShape::new(1080, 1920)),
            ExecutionPolicy::EvaluateAll,
        );
        prop_assert_eq!(result.status, RunStatus::AllGatesPassed);
        prop_assert_eq!(result.gate_level, 4);
        prop_assert_eq!(result.gates_results.len(), 5);
        prop_assert_eq!(
            result.blocked_at,
            result.critical_feedback.as_ref().map(|c| c.gate)
        );
    }

    #[test]
    fn stop_on_fail_results_are_a_prefix(framing in 0.0f64..100.0, nose_x in 0.0f64..1080.0) {
        let input = GateInput::new(ImageShape::new(1080, 1920), ImageShape::new(1080, 1920))
            .with_keypoints(
                KeypointSetBuilder::new().nose(nose_x, 500.0).build(),
                KeypointSetBuilder::new().nose(900.0, 500.0).build(),
            )
            .with_legacy(LegacyComparison::with_compression("(0.5)", "(0.5)"));
        let result = pipeline(framing, framing).run(&input, ExecutionPolicy::StopOnFail);

        let keys: Vec<GateKey> = result.gates_results.keys().copied().collect();
        prop_assert_eq!(&keys[..], &GateKey::ORDER[..keys.len()]);
        match result.blocked_at {
            Some(gate) => {
                prop_assert_eq!(keys.last().copied(), Some(gate));
                prop_assert_eq!(result.gate_level, gate.index());
            }
            None => prop_assert_eq!(keys.len(), 5),
        }
    }
}

#[test]
fn compression_score_continuous_at_boundaries() {
    let eps = 1e-9;
    for boundary in [0.2, 0.4] {
        let below = compression_score(boundary - eps);
        let at = compression_score(boundary);
        assert!((below - at).abs() < 1e-6, "jump at {boundary}: {below} vs {at}");
    }
    // Left of 0.05 the match score applies and the first segment starts at the same value
    assert!((compression_score(0.05) - 95.0).abs() < 1e-9);
    assert!((compression_score(0.05 - eps) - 95.0).abs() < 1e-9);
}
