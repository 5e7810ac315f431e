use crate::domain::catalog::VoiceProfile;
use async_trait::async_trait;

/// Errors a TTS provider can surface for a single request
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("unknown voice: {0}")]
    UnknownVoice(String),
    #[error("unsupported parameter: {0}")]
    UnsupportedParameter(String),
    #[error("failed to read audio stream: {0}")]
    Stream(String),
    #[error("provider returned no audio")]
    EmptyAudio,
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly, OpenAI, ...)
///
/// Implementations are responsible for:
/// - Translating the voice profile (voice, rate, pitch) into provider parameters
/// - Rejecting parameters the provider cannot honour instead of silently dropping them
/// - Concatenating streamed chunks into a single audio buffer
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with the given voice profile
    ///
    /// Returns the encoded audio (MP3) ready to be written to disk
    ///
    /// # Errors
    /// Returns error if the voice is unknown, a parameter is unsupported or
    /// the provider is unavailable
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SynthesisError>;

    /// Short provider name used in logs
    fn provider_name(&self) -> &'static str;
}
