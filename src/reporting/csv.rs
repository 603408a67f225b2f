//! Comma-separated-value export
use super::{ExportError, ReportExporter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Exporter writing one CSV file per run into a directory.
///
/// A run labeled `label` is written to `{dir}/{label}_results.csv`: a single
/// header row `trial,reward,algorithm` followed by one row per trial with the
/// 0-based trial index, the realized reward, and the label. Re-exporting
/// under the same label overwrites the previous file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the output file for the given run label.
    pub fn output_path(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{}_results.csv", label))
    }
}

impl ReportExporter for CsvExporter {
    fn export(&mut self, label: &str, rewards: &[f64]) -> Result<(), ExportError> {
        let path = self.output_path(label);
        write_series(&path, label, rewards).map_err(|source| ExportError::Write { path, source })
    }
}

fn write_series(path: &Path, label: &str, rewards: &[f64]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "trial,reward,algorithm")?;
    for (trial, reward) in rewards.iter().enumerate() {
        writeln!(file, "{},{},{}", trial, reward, label)?;
    }
    file.flush()
}

#[cfg(test)]
mod csv_exporter {
    use super::*;
    use std::fs;

    #[test]
    fn writes_header_and_one_row_per_trial() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = CsvExporter::new(dir.path());
        exporter.export("EpsilonGreedy", &[1.0, 5.0, 3.0]).unwrap();

        let contents = fs::read_to_string(dir.path().join("EpsilonGreedy_results.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "trial,reward,algorithm");
        assert_eq!(lines[1], "0,1,EpsilonGreedy");
        assert_eq!(lines[2], "1,5,EpsilonGreedy");
        assert_eq!(lines[3], "2,3,EpsilonGreedy");
        assert_eq!(
            contents.matches("trial,reward,algorithm").count(),
            1,
            "header must appear exactly once"
        );
    }

    #[test]
    fn empty_series_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = CsvExporter::new(dir.path());
        exporter.export("ThompsonSampling", &[]).unwrap();

        let contents =
            fs::read_to_string(dir.path().join("ThompsonSampling_results.csv")).unwrap();
        assert_eq!(contents, "trial,reward,algorithm\n");
    }

    #[test]
    fn re_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = CsvExporter::new(dir.path());
        exporter.export("EpsilonGreedy", &[1.0, 2.0]).unwrap();
        exporter.export("EpsilonGreedy", &[9.0]).unwrap();

        let contents = fs::read_to_string(exporter.output_path("EpsilonGreedy")).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut exporter = CsvExporter::new("/nonexistent/banditlab-test");
        let result = exporter.export("EpsilonGreedy", &[1.0]);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
