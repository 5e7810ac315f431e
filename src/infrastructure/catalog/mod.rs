use crate::domain::catalog::{
    default_openai_voices, default_polly_voices, default_vocabulary, ConfigurationError,
    Vocabulary, VoiceProfiles,
};
use crate::infrastructure::config::TtsProvider;
use std::path::Path;

/// Load the vocabulary from `path`, or the built-in board vocabulary
pub async fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, ConfigurationError> {
    match path {
        Some(path) => {
            let json = read_source(path).await?;
            Vocabulary::from_json(&json).map_err(|e| with_path(e, path))
        }
        None => default_vocabulary(),
    }
}

/// Load voice profiles from `path`, or the defaults for the chosen provider
pub async fn load_voices(
    path: Option<&Path>,
    provider: TtsProvider,
) -> Result<VoiceProfiles, ConfigurationError> {
    match path {
        Some(path) => {
            let json = read_source(path).await?;
            VoiceProfiles::from_json(&json).map_err(|e| with_path(e, path))
        }
        None => match provider {
            TtsProvider::Polly => default_polly_voices(),
            TtsProvider::OpenAi => default_openai_voices(),
        },
    }
}

async fn read_source(path: &Path) -> Result<String, ConfigurationError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigurationError::Source {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Parse errors carry a placeholder path; point them at the real file
fn with_path(err: ConfigurationError, path: &Path) -> ConfigurationError {
    match err {
        ConfigurationError::Source { message, .. } => ConfigurationError::Source {
            path: path.display().to_string(),
            message,
        },
        other => other,
    }
}
