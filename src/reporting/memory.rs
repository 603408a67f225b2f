//! In-memory result capture
use super::{ExportError, ReportExporter};

/// Exporter that keeps every exported series in memory.
///
/// Useful for inspecting results programmatically and in tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryExporter {
    series: Vec<(String, Vec<f64>)>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All exported series, in export order.
    pub fn series(&self) -> &[(String, Vec<f64>)] {
        &self.series
    }
}

impl ReportExporter for MemoryExporter {
    fn export(&mut self, label: &str, rewards: &[f64]) -> Result<(), ExportError> {
        self.series.push((label.to_owned(), rewards.to_vec()));
        Ok(())
    }
}
