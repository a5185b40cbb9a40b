//! Report output port for writing evaluation results.

use crate::domain::Evaluation;

/// Port for outputting evaluations.
pub trait ReportOutput: Send + Sync {
    /// Writes a single evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, evaluation: &Evaluation) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
