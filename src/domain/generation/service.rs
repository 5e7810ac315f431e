use super::error::{GenerationServiceError, UnitError};
use super::report::GenerationReport;
use super::unit::SynthesisUnit;
use crate::domain::catalog::{ConfigurationError, Vocabulary, VoiceProfiles};
use crate::infrastructure::repositories::{AudioFileRepository, TtsRepository};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

pub struct GenerationService {
    tts_repo: Arc<dyn TtsRepository>,
    files: Arc<AudioFileRepository>,
    max_in_flight: Option<usize>,
}

impl GenerationService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        files: Arc<AudioFileRepository>,
        max_in_flight: Option<usize>,
    ) -> Self {
        Self {
            tts_repo,
            files,
            max_in_flight: max_in_flight.filter(|limit| *limit > 0),
        }
    }
}

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    /// Generate one clip per (item, language) pair of the vocabulary
    ///
    /// This operation:
    /// - Checks every vocabulary language has a voice profile, before any work
    /// - Runs all units concurrently, optionally bounded by `max_in_flight`
    /// - Keeps going when a unit fails; the failure is logged and returned
    /// - Builds file totals by scanning the output tree once all units settle
    async fn run(
        &self,
        vocabulary: &Vocabulary,
        voices: &VoiceProfiles,
    ) -> Result<GenerationReport, GenerationServiceError>;
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn run(
        &self,
        vocabulary: &Vocabulary,
        voices: &VoiceProfiles,
    ) -> Result<GenerationReport, GenerationServiceError> {
        // 1. Fail before dispatching anything if a language has no voice
        voices.ensure_covers(vocabulary)?;

        // 2. One unit per (item, language) pair
        let units = self.plan_units(vocabulary, voices)?;
        let unit_count = units.len();
        let limit = self.max_in_flight.unwrap_or(unit_count).max(1);

        tracing::info!(
            provider = self.tts_repo.provider_name(),
            items = vocabulary.items().len(),
            languages = vocabulary.languages().len(),
            units = unit_count,
            max_in_flight = limit,
            output_root = %self.files.root().display(),
            "Starting audio generation"
        );

        // 3. Fan out, then wait for every unit to settle
        let tts_repo = self.tts_repo.as_ref();
        let files = self.files.as_ref();
        let outcomes: Vec<Result<_, UnitError>> = stream::iter(units)
            .map(|unit| unit.synthesize_and_save(tts_repo, files))
            .buffer_unordered(limit)
            .collect()
            .await;

        let mut report = GenerationReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(file) => report.generated.push(file),
                Err(err) => report.failures.push(err),
            }
        }

        // 4. Totals come from disk, not from the outcomes above
        let scan = self.files.scan(vocabulary.languages()).await;
        report.file_count = scan.file_count;
        report.total_bytes = scan.total_bytes;
        report.scan_errors = scan.errors;

        tracing::info!(
            written = report.generated.len(),
            failed = report.failures.len(),
            file_count = report.file_count,
            total_bytes = report.total_bytes,
            "Audio generation finished"
        );

        Ok(report)
    }
}

impl GenerationService {
    fn plan_units(
        &self,
        vocabulary: &Vocabulary,
        voices: &VoiceProfiles,
    ) -> Result<Vec<SynthesisUnit>, GenerationServiceError> {
        let mut units = Vec::with_capacity(vocabulary.pair_count());

        for item in vocabulary.items() {
            for (language, text) in item.labels() {
                let voice = voices
                    .get(language)
                    .ok_or_else(|| ConfigurationError::MissingVoiceProfile(language.clone()))?;

                units.push(SynthesisUnit {
                    item_id: item.id().to_string(),
                    language: language.clone(),
                    text: text.clone(),
                    voice: voice.clone(),
                    destination: self.files.path_for(language, item.id()),
                });
            }
        }

        Ok(units)
    }
}
