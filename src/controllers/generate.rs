use std::fmt::Write as _;
use std::process::ExitCode;
use std::sync::Arc;

use crate::{
    domain::{
        catalog::{Vocabulary, VoiceProfiles},
        generation::{GenerationReport, GenerationService, GenerationServiceApi},
    },
    error::{AppError, AppResult},
};

pub struct GenerateController {
    generation_service: Arc<GenerationService>,
}

impl GenerateController {
    pub fn new(generation_service: Arc<GenerationService>) -> Self {
        Self { generation_service }
    }

    /// Run the whole batch and print the summary
    ///
    /// Exits with `0` when every unit produced its file and the output tree
    /// could be scanned, `1` otherwise.
    pub async fn generate(
        &self,
        vocabulary: &Vocabulary,
        voices: &VoiceProfiles,
    ) -> AppResult<ExitCode> {
        println!(
            "Generating audio for {} words × {} languages...\n",
            vocabulary.items().len(),
            vocabulary.languages().len()
        );

        let report = self
            .generation_service
            .run(vocabulary, voices)
            .await
            .map_err(AppError::from)?;

        print!("{}", render_summary(&report));

        if report.is_complete() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Human-readable report: one line per unit, then the on-disk totals
pub fn render_summary(report: &GenerationReport) -> String {
    let mut out = String::new();

    let mut generated: Vec<_> = report.generated.iter().collect();
    generated.sort_by(|a, b| a.path.cmp(&b.path));
    for file in generated {
        let _ = writeln!(
            out,
            "  ✓ {} ({:.1} KB)",
            file.path.display(),
            file.size_bytes as f64 / 1024.0
        );
    }

    for failure in &report.failures {
        let _ = writeln!(out, "  ✗ {}", failure);
    }
    for scan_error in &report.scan_errors {
        let _ = writeln!(out, "  ! {}", scan_error);
    }

    let _ = writeln!(
        out,
        "\n{} Generated {} audio files ({:.0} KB total)",
        if report.is_complete() { "✅ Done!" } else { "⚠️ Finished with errors." },
        report.file_count,
        report.total_kilobytes()
    );
    if !report.failures.is_empty() {
        let _ = writeln!(out, "{} unit(s) failed; re-run to regenerate them.", report.failures.len());
    }

    out
}
