use crate::domain::catalog::{ConfigurationError, LanguageCode};
use crate::error::AppError;
use crate::infrastructure::repositories::SynthesisError;
use std::path::PathBuf;

/// Failure of one (item, language) unit. Siblings keep running.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("synthesis failed for {item_id} [{language}]: {source}")]
    Synthesis {
        item_id: String,
        language: LanguageCode,
        #[source]
        source: SynthesisError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Listing the output tree failed; the report only covers what could be read
#[derive(Debug, thiserror::Error)]
pub enum ReportingError {
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationServiceError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl From<GenerationServiceError> for AppError {
    fn from(err: GenerationServiceError) -> Self {
        match err {
            GenerationServiceError::Configuration(e) => AppError::Configuration(e),
        }
    }
}
