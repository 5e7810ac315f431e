use super::tts_repository::{SynthesisError, TtsRepository};
use crate::domain::catalog::VoiceProfile;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 billed characters per request
const MAX_TEXT_LENGTH: usize = 3000;

/// AWS Polly implementation of TTS repository
///
/// Rate is applied through SSML `<prosody>`. Neural voices do not support
/// pitch changes, so a non-neutral pitch is rejected.
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Wrap text in SSML carrying the rate adjustment
    ///
    /// Polly expresses rate as a percentage of the default speed, so `-10%`
    /// becomes `90%`.
    fn build_ssml(text: &str, voice: &VoiceProfile) -> Result<String, SynthesisError> {
        if !voice.pitch.is_neutral() {
            return Err(SynthesisError::UnsupportedParameter(format!(
                "pitch {} is not supported by Polly neural voices",
                voice.pitch
            )));
        }

        let rate_percent = 100 + voice.rate.percent();
        if !(20..=200).contains(&rate_percent) {
            return Err(SynthesisError::UnsupportedParameter(format!(
                "rate {} is outside Polly's 20%..200% range",
                voice.rate
            )));
        }

        Ok(format!(
            "<speak><prosody rate=\"{}%\">{}</prosody></speak>",
            rate_percent,
            escape_ssml(text)
        ))
    }

    /// Call AWS Polly to synthesize a single SSML document
    async fn call_polly(&self, ssml: String, voice_name: &str) -> Result<Vec<u8>, SynthesisError> {
        if !VoiceId::values().contains(&voice_name) {
            return Err(SynthesisError::UnknownVoice(voice_name.to_string()));
        }
        let voice_id = VoiceId::from(voice_name);
        let engine = Engine::Neural;

        tracing::debug!(
            voice = voice_name,
            engine = ?engine,
            output_format = "Mp3",
            ssml_length = ssml.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(ssml)
            .text_type(TextType::Ssml)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice = voice_name,
                    engine = ?engine,
                    "AWS Polly synthesize_speech failed"
                );
                SynthesisError::Provider(format!("AWS Polly error: {}", e))
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            SynthesisError::Stream(e.to_string())
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(SynthesisError::UnsupportedParameter(format!(
                "text of {} characters exceeds Polly's {} character limit",
                text.chars().count(),
                MAX_TEXT_LENGTH
            )));
        }

        let ssml = Self::build_ssml(text, voice)?;
        let audio_data = self.call_polly(ssml, &voice.voice).await?;

        tracing::debug!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    fn provider_name(&self) -> &'static str {
        "polly"
    }
}

fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
