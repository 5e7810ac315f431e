use crate::infrastructure::config::{Config, TtsProvider};
use crate::infrastructure::repositories::{OpenAiTtsRepository, PollyTtsRepository, TtsRepository};
use std::sync::Arc;

/// Build the synthesis client selected by `TTS_PROVIDER`
///
/// Credentials are resolved by each SDK's default chain (AWS profile/env,
/// `OPENAI_API_KEY`).
pub async fn create_tts_repository(config: &Config) -> Arc<dyn TtsRepository> {
    match config.tts_provider {
        TtsProvider::Polly => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

            let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
            let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
            if !has_access_key || !has_secret_key {
                tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (profile, instance metadata, etc.)");
            }

            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;

            let polly_client = aws_sdk_polly::Client::new(&aws_config);
            Arc::new(PollyTtsRepository::new(Arc::new(polly_client)))
        }
        TtsProvider::OpenAi => {
            tracing::info!(model = %config.openai_model, "Initializing OpenAI TTS client");

            if std::env::var("OPENAI_API_KEY").is_err() {
                tracing::warn!("OPENAI_API_KEY is not set; OpenAI requests will be rejected");
            }

            let client = async_openai::Client::new();
            Arc::new(OpenAiTtsRepository::new(
                Arc::new(client),
                config.openai_model.clone(),
            ))
        }
    }
}
