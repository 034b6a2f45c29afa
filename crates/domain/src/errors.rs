//! Error types used throughout the domain

use drako_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use drako_common::time::DeltaParseError;
use drako_common::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Drako
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DrakoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Drako operations
pub type Result<T> = std::result::Result<T, DrakoError>;

impl From<DeltaParseError> for DrakoError {
    fn from(err: DeltaParseError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<ValidationError> for DrakoError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CommonError> for DrakoError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::Config { .. }
            | CommonError::Serialization { .. }
            | CommonError::Io { .. } => Self::Config(err.to_string()),
            CommonError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl ErrorClassification for DrakoError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Info,
            Self::Config(_) | Self::Validation(_) | Self::InvalidInput(_) => ErrorSeverity::Error,
            Self::Internal(_) => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
