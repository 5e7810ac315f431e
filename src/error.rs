use crate::domain::catalog::ConfigurationError;
use std::process::ExitCode;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid environment: {0}")]
    Environment(String),
}

impl AppError {
    /// Process exit status for this error
    ///
    /// `1` is reserved for runs that completed with failed units.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Configuration(_) | Self::Environment(_) => ExitCode::from(2),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
