use super::tts_repository::{SynthesisError, TtsRepository};
use crate::domain::catalog::{RateAdjustment, VoiceProfile};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, Voice},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_TEXT_LENGTH: usize = 4096;

const MIN_SPEED: f32 = 0.25;
const MAX_SPEED: f32 = 4.0;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    fn parse_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    /// Map a voice name to the API enum. Unknown names are an error rather
    /// than a silent fallback, so a typo in the voice table surfaces per unit.
    fn parse_voice(voice: &str) -> Result<Voice, SynthesisError> {
        match voice.to_lowercase().as_str() {
            "alloy" => Ok(Voice::Alloy),
            "echo" => Ok(Voice::Echo),
            "fable" => Ok(Voice::Fable),
            "onyx" => Ok(Voice::Onyx),
            "nova" => Ok(Voice::Nova),
            "shimmer" => Ok(Voice::Shimmer),
            _ => Err(SynthesisError::UnknownVoice(voice.to_string())),
        }
    }

    /// `-10%` becomes a speed multiplier of 0.9
    fn speed_for(rate: RateAdjustment) -> f32 {
        (1.0 + rate.percent() as f32 / 100.0).clamp(MIN_SPEED, MAX_SPEED)
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        if !voice.pitch.is_neutral() {
            return Err(SynthesisError::UnsupportedParameter(format!(
                "pitch {} is not supported by the OpenAI speech API",
                voice.pitch
            )));
        }
        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(SynthesisError::UnsupportedParameter(format!(
                "text exceeds OpenAI's {} character limit",
                MAX_TEXT_LENGTH
            )));
        }

        let voice_enum = Self::parse_voice(&voice.voice)?;
        let speed = Self::speed_for(voice.rate);

        tracing::debug!(
            model = %self.model,
            voice = %voice.voice,
            speed = speed,
            text_length = text.len(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.parse_model(),
            input: text.to_string(),
            voice: voice_enum,
            response_format: None, // Defaults to MP3
            speed: Some(speed),
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = %voice.voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            SynthesisError::Provider(format!("OpenAI TTS error: {}", e))
        })?;

        let audio_data = response.bytes.to_vec();

        tracing::debug!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
