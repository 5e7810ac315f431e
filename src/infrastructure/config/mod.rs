use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub tts_provider: TtsProvider,
    pub aws_region: String,
    pub openai_model: String,
    /// Upper bound on units in flight; `None` dispatches every unit at once
    pub max_in_flight: Option<usize>,
    pub vocabulary_file: Option<PathBuf>,
    pub voices_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TtsProvider {
    Polly,
    OpenAi,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in
    /// production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            output_dir: non_empty("OUTPUT_DIR")
                .unwrap_or_else(|| "public/audio".to_string())
                .into(),
            tts_provider: match non_empty("TTS_PROVIDER")
                .unwrap_or_else(|| "polly".to_string())
                .to_lowercase()
                .as_str()
            {
                "polly" => TtsProvider::Polly,
                "openai" => TtsProvider::OpenAi,
                other => {
                    return Err(AppError::Environment(format!(
                        "TTS_PROVIDER must be \"polly\" or \"openai\", got {:?}",
                        other
                    )))
                }
            },
            aws_region: non_empty("AWS_REGION").unwrap_or_else(|| "eu-west-1".to_string()),
            openai_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| "tts-1".to_string()),
            max_in_flight: non_empty("MAX_IN_FLIGHT")
                .map(|value| match value.trim().parse::<usize>() {
                    Ok(limit) if limit > 0 => Ok(limit),
                    _ => Err(AppError::Environment(format!(
                        "MAX_IN_FLIGHT must be a positive integer, got {:?}",
                        value
                    ))),
                })
                .transpose()?,
            vocabulary_file: non_empty("VOCABULARY_FILE").map(PathBuf::from),
            voices_file: non_empty("VOICES_FILE").map(PathBuf::from),
            log_format: match non_empty("LOG_FORMAT")
                .unwrap_or_else(|| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::Environment(format!(
                        "LOG_FORMAT must be \"pretty\" or \"json\", got {:?}",
                        other
                    )))
                }
            },
        };

        Ok(config)
    }
}
