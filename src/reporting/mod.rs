//! Persisting per-trial experiment results.
mod csv;
mod memory;

pub use self::csv::CsvExporter;
pub use memory::MemoryExporter;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Persist a named per-trial reward series.
///
/// One series per experiment run, tagged with the run's algorithm label.
pub trait ReportExporter {
    /// Record and persist the reward series of one run under `label`.
    ///
    /// # Errors
    /// [`ExportError`] if the series cannot be persisted.
    fn export(&mut self, label: &str, rewards: &[f64]) -> Result<(), ExportError>;
}

/// Exporter that discards every series
impl ReportExporter for () {
    fn export(&mut self, _: &str, _: &[f64]) -> Result<(), ExportError> {
        Ok(())
    }
}

/// Error persisting a result series.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write results to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
