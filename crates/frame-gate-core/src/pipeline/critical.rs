//! Critical feedback for the gate that blocked a run.

use crate::domain::{CriticalFeedback, GateFeedback, GateKey, Priority};
use crate::gates::move_direction;
use crate::text::Messages;

/// Upper bound on actions in a critical feedback.
const MAX_ACTIONS: usize = 3;

/// Builds the critical feedback for a failed gate from its feedback payload.
pub(crate) fn critical_feedback(
    gate: GateKey,
    feedback: &GateFeedback,
    messages: &Messages,
) -> CriticalFeedback {
    let (issue, mut actions, details) = match feedback {
        GateFeedback::AspectRatio(fb) => (fb.action.clone(), vec![fb.action.clone()], None),
        GateFeedback::Framing(fb) => {
            let mut actions: Vec<String> = Vec::with_capacity(MAX_ACTIONS + 1);
            let margin_action = fb.margins.camera_action().map(str::to_string);
            for action in margin_action.into_iter().chain(fb.actions.iter().cloned()) {
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
            if actions.is_empty() {
                actions.push(messages.generic_action(gate));
            }
            (fb.summary.clone(), actions, Some(feedback.clone()))
        }
        GateFeedback::Composition(fb) => {
            let action = move_direction(fb, messages)
                .unwrap_or_else(|| messages.generic_action(GateKey::Composition));
            (
                messages.composition_issue(),
                vec![action],
                Some(feedback.clone()),
            )
        }
        GateFeedback::Compression(fb) => {
            let mut actions: Vec<String> = fb
                .adjustment
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if actions.is_empty() {
                actions.push(messages.generic_action(GateKey::Compression));
            }
            (
                messages.compression_issue(&fb.current_lens_name, &fb.target_lens_name),
                actions,
                Some(feedback.clone()),
            )
        }
        GateFeedback::None | GateFeedback::Pose(_) => (
            messages.generic_issue(gate),
            vec![messages.generic_action(gate)],
            None,
        ),
    };

    actions.truncate(MAX_ACTIONS);

    CriticalFeedback {
        gate,
        gate_name: messages.gate_name(gate).to_string(),
        issue,
        actions,
        priority: Priority::for_gate(gate),
        details,
    }
}
