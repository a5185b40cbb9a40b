//! Aggregate score, friendly summary and gate table.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::domain::{CriticalFeedback, GateKey, GateOutcome, RunStatus};
use crate::text::Messages;

/// Mean of every score present; the unscored pose gate is skipped.
///
/// Returns 0 when no gate has a score.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overall_score(results: &BTreeMap<GateKey, GateOutcome>) -> f64 {
    let scores: Vec<f64> = results.values().filter_map(|o| o.score).collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Guidance for the user; the first matching rule wins.
///
/// 1. All gates passed: tiered by overall score.
/// 2. Blocked with critical feedback: built around its first action.
/// 3. Otherwise: by how many gates passed so far.
#[must_use]
pub fn friendly_summary(
    status: RunStatus,
    overall_score: f64,
    critical: Option<&CriticalFeedback>,
    gates_passed: &[GateKey],
    messages: &Messages,
) -> String {
    if status == RunStatus::AllGatesPassed {
        return messages.all_passed_summary(overall_score).to_string();
    }
    if let Some(critical) = critical.filter(|_| status.is_blocked()) {
        let first_action = critical.actions.first().map(String::as_str);
        return messages.blocked_summary(critical.gate, first_action);
    }
    messages.progress_summary(gates_passed)
}

/// One line per gate in pipeline order.
#[must_use]
pub fn gate_table(results: &BTreeMap<GateKey, GateOutcome>, messages: &Messages) -> String {
    let mut table = String::new();
    for gate in GateKey::ORDER {
        if !table.is_empty() {
            table.push('\n');
        }
        let name = messages.gate_name(gate);
        // Writing to a String cannot fail
        let _ = match results.get(&gate) {
            Some(GateOutcome {
                score: Some(score),
                passed,
                ..
            }) => {
                let glyph = if *passed { "[OK]" } else { "[!!]" };
                write!(table, "{glyph} {name}: {score:.0}")
            }
            Some(_) => write!(table, "[OK] {name}: {}", messages.table_done()),
            None => write!(table, "[--] {name}: {}", messages.table_pending()),
        };
    }
    table
}

/// One-line message for a run status.
#[must_use]
pub fn status_message(status: RunStatus, messages: &Messages) -> String {
    messages.status_message(status).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GateEvaluation, GateFeedback, Priority};
    use crate::text::Language;

    fn outcome(score: Option<f64>, passed: bool) -> GateOutcome {
        GateOutcome {
            score,
            passed,
            feedback: GateFeedback::None,
            threshold: score.map(|_| 75.0),
        }
    }

    #[test]
    fn test_overall_score_skips_pose() {
        let mut results = BTreeMap::new();
        results.insert(GateKey::AspectRatio, outcome(Some(100.0), true));
        results.insert(GateKey::Framing, outcome(Some(80.0), true));
        results.insert(
            GateKey::Pose,
            GateOutcome::judge(GateEvaluation::advisory(GateFeedback::None), None),
        );
        assert!((overall_score(&results) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_score_empty() {
        assert!(overall_score(&BTreeMap::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gate_table_lines() {
        let mut results = BTreeMap::new();
        results.insert(GateKey::AspectRatio, outcome(Some(100.0), true));
        results.insert(GateKey::Framing, outcome(Some(62.4), false));
        let table = gate_table(&results, &Messages::default());
        assert_eq!(
            table,
            "[OK] Aspect ratio: 100\n[!!] Framing: 62\n[--] Composition: pending\n\
             [--] Compression: pending\n[--] Pose: pending"
        );
    }

    #[test]
    fn test_gate_table_pose_done() {
        let mut results = BTreeMap::new();
        results.insert(GateKey::Pose, outcome(None, true));
        let table = gate_table(&results, &Messages::default());
        assert!(table.ends_with("[OK] Pose: done"));
    }

    #[test]
    fn test_friendly_summary_rules() {
        let messages = Messages::new(Language::English);
        assert_eq!(
            friendly_summary(RunStatus::AllGatesPassed, 96.0, None, &[], &messages),
            "Perfect! Nearly identical to the reference."
        );

        let critical = CriticalFeedback {
            gate: GateKey::Composition,
            gate_name: "Composition".into(),
            issue: "Subject position differs from the reference".into(),
            actions: vec!["move camera right".into()],
            priority: Priority::Medium,
            details: None,
        };
        assert_eq!(
            friendly_summary(
                RunStatus::BlockedAtComposition,
                40.0,
                Some(&critical),
                &[GateKey::AspectRatio, GateKey::Framing],
                &messages
            ),
            "Adjust the composition. move camera right"
        );

        assert_eq!(
            friendly_summary(
                RunStatus::BlockedAtFraming,
                60.0,
                None,
                &[GateKey::AspectRatio],
                &messages
            ),
            "Nice! Aspect ratio passed. Move on to the next step."
        );
    }
}
