//! JSON output adapter.

use anyhow::Result;
use frame_gate_core::{Evaluation, ReportOutput};
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON output adapter.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    pretty: bool,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout(pretty: bool) -> Self {
        Self::new(Box::new(io::stdout()), pretty)
    }

    /// Creates a new JSON output writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty,
        }
    }
}

impl ReportOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, evaluation: &Evaluation) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(evaluation)?
        } else {
            serde_json::to_string(evaluation)?
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
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
