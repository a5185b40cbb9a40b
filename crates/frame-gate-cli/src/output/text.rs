//! Human-readable report output.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use frame_gate_core::{Evaluation, GateRunResult, Messages, ReportOutput};

/// Plain text output adapter.
pub struct TextOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    messages: Messages,
}

impl TextOutput {
    /// Creates a text output writing to stdout.
    #[must_use]
    pub fn stdout(messages: Messages) -> Self {
        Self::new(Box::new(io::stdout()), messages)
    }

    /// Creates a text output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, messages: Messages) -> Self {
        Self {
            writer: Mutex::new(writer),
            messages,
        }
    }

    fn render(&self, evaluation: &Evaluation) -> String {
        match evaluation {
            Evaluation::Failed(failure) => format!("error: {}\n", failure.error),
            Evaluation::Completed(result) => self.render_run(result),
        }
    }

    fn render_run(&self, result: &GateRunResult) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", result.message);
        let _ = writeln!(out, "{}", result.friendly_summary);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", result.summary);

        if let Some(ref critical) = result.critical_feedback {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} ({}): {}",
                self.messages.gate_name(critical.gate),
                critical.priority.as_str(),
                critical.issue
            );
            for action in &critical.actions {
                let _ = writeln!(out, "  - {action}");
            }
        }

        for suggestion in &result.pose_suggestions {
            let _ = writeln!(out, "  * {}", suggestion.suggestion);
        }

        let _ = writeln!(out, "{:.0}/100", result.overall_score);
        out
    }
}

impl ReportOutput for TextOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, evaluation: &Evaluation) -> Result<()> {
        let text = self.render(evaluation);
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_gate_core::InputFailure;

    #[test]
    fn test_failure_renders_error_line() {
        let output = TextOutput::new(Box::new(io::sink()), Messages::default());
        let text = output.render(&Evaluation::Failed(InputFailure::new("image load failed")));
        assert_eq!(text, "error: image load failed\n");
    }
}
