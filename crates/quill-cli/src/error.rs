//! CLI error handling.

use std::process::ExitCode;

use quill_authz::{AccessError, InvalidValueError, UnknownRoleError};
use quill_common_config::ConfigError;
use quill_common_log::LogError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    Log(#[from] LogError),

    #[error("{message}")]
    Validation { message: String },

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            Self::Config(_) | Self::Log(_) => 2,
            Self::Validation { .. } => 3,
            Self::Access(AccessError::Conflict(_)) => 4,
            Self::Access(AccessError::Forbidden { .. }) => 1,
            Self::Access(_) => 3,
            Self::Other(_) => 1,
        };
        ExitCode::from(code)
    }
}

impl From<UnknownRoleError> for CliError {
    fn from(err: UnknownRoleError) -> Self {
        Self::Access(err.into())
    }
}

impl From<InvalidValueError> for CliError {
    fn from(err: InvalidValueError) -> Self {
        Self::Access(err.into())
    }
}
