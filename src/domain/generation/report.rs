use super::error::{ReportingError, UnitError};
use super::unit::GeneratedFile;

/// Outcome of a batch run
///
/// `file_count` and `total_bytes` come from scanning the output tree after
/// every unit settled, so they describe what is on disk, including files left
/// by earlier runs, rather than what this run believes it wrote.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub file_count: usize,
    pub total_bytes: u64,
    pub generated: Vec<GeneratedFile>,
    pub failures: Vec<UnitError>,
    pub scan_errors: Vec<ReportingError>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.scan_errors.is_empty()
    }

    pub fn total_kilobytes(&self) -> f64 {
        self.total_bytes as f64 / 1024.0
    }
}
