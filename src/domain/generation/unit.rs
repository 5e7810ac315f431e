use super::error::UnitError;
use crate::domain::catalog::{LanguageCode, VoiceProfile};
use crate::infrastructure::repositories::{AudioFileRepository, SynthesisError, TtsRepository};
use std::path::PathBuf;

/// One (item, language) pair to synthesize and write
#[derive(Debug, Clone)]
pub struct SynthesisUnit {
    pub item_id: String,
    pub language: LanguageCode,
    pub text: String,
    pub voice: VoiceProfile,
    pub destination: PathBuf,
}

/// A clip that was written during this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub item_id: String,
    pub language: LanguageCode,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl SynthesisUnit {
    /// Request audio for this unit and write it to its destination
    ///
    /// The outcome is logged as soon as the unit settles, so progress shows up
    /// while sibling units are still in flight.
    pub async fn synthesize_and_save(
        self,
        tts_repo: &dyn TtsRepository,
        files: &AudioFileRepository,
    ) -> Result<GeneratedFile, UnitError> {
        let outcome = self.execute(tts_repo, files).await;
        match &outcome {
            Ok(file) => tracing::info!(
                item_id = %file.item_id,
                language = %file.language,
                path = %file.path.display(),
                size_bytes = file.size_bytes,
                "Audio file written"
            ),
            Err(err) => tracing::error!(error = %err, "Synthesis unit failed"),
        }
        outcome
    }

    async fn execute(
        self,
        tts_repo: &dyn TtsRepository,
        files: &AudioFileRepository,
    ) -> Result<GeneratedFile, UnitError> {
        tracing::debug!(
            item_id = %self.item_id,
            language = %self.language,
            voice = %self.voice.voice,
            destination = %self.destination.display(),
            "Synthesizing unit"
        );

        let audio = tts_repo
            .synthesize(&self.text, &self.voice)
            .await
            .and_then(|audio| {
                if audio.is_empty() {
                    Err(SynthesisError::EmptyAudio)
                } else {
                    Ok(audio)
                }
            })
            .map_err(|source| UnitError::Synthesis {
                item_id: self.item_id.clone(),
                language: self.language.clone(),
                source,
            })?;

        let (path, size_bytes) = files.save(&self.language, &self.item_id, &audio).await?;

        Ok(GeneratedFile {
            item_id: self.item_id,
            language: self.language,
            path,
            size_bytes,
        })
    }
}
