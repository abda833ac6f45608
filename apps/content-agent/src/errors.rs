use std::process::ExitCode;

use thiserror::Error;

use crate::generation::validation::ValidationError;

/// Application-level error type.
/// `exit_code()` maps each variant to the process exit status the CLI reports.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A template lookup failed for a value that already passed validation.
    /// Always a template library bug, never a user error.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Exit status for validation failures. Everything else exits with 1.
pub const VALIDATION_EXIT_CODE: u8 = 2;

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Validation(e) => {
                tracing::warn!("Rejected request: field={} kind={:?}", e.field, e.kind);
                ExitCode::from(VALIDATION_EXIT_CODE)
            }
            AppError::InternalConsistency(msg) => {
                tracing::error!("Template library inconsistency: {msg}");
                ExitCode::FAILURE
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                ExitCode::FAILURE
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {e}");
                ExitCode::FAILURE
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ExitCode::FAILURE
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
