use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use aac_audio_gen::controllers::generate::GenerateController;
use aac_audio_gen::domain::generation::GenerationService;
use aac_audio_gen::error::AppResult;
use aac_audio_gen::infrastructure::catalog::{load_vocabulary, load_voices};
use aac_audio_gen::infrastructure::config::{Config, LogFormat};
use aac_audio_gen::infrastructure::providers::create_tts_repository;
use aac_audio_gen::infrastructure::repositories::AudioFileRepository;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "Audio generation aborted");
            eprintln!("error: {}", err);
            err.exit_code()
        }
    }
}

async fn run() -> AppResult<ExitCode> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        provider = ?config.tts_provider,
        output_dir = %config.output_dir.display(),
        "Starting audio generation"
    );

    // Static tables are loaded and validated before any client is built
    let vocabulary = load_vocabulary(config.vocabulary_file.as_deref()).await?;
    let voices = load_voices(config.voices_file.as_deref(), config.tts_provider).await?;
    voices.ensure_covers(&vocabulary)?;
    tracing::info!(
        items = vocabulary.items().len(),
        languages = vocabulary.languages().len(),
        "Vocabulary and voice profiles loaded"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    let tts_repo = create_tts_repository(&config).await;
    let files = Arc::new(AudioFileRepository::new(config.output_dir.clone()));

    // 2. Services
    let generation_service = Arc::new(GenerationService::new(
        tts_repo,
        files,
        config.max_in_flight,
    ));

    // 3. Controller
    let controller = GenerateController::new(generation_service);
    controller.generate(&vocabulary, &voices).await
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aac_audio_gen=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aac_audio_gen=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
