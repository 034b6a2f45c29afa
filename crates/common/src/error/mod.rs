//! Shared error type for loading Drako configuration
//!
//! [`CommonError`] covers the failures met while locating, reading and
//! decoding a configuration document. Crate errors wrap it and delegate
//! their [`ErrorClassification`] to it:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum LoaderError {
//!     #[error("No configuration file found")]
//!     Missing,
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```
//!
//! ## Severity Levels
//!
//! | Level | Variant | Example |
//! |-------|---------|---------|
//! | **Info** | `NotFound` | Named config file does not exist |
//! | **Warning** | `Io` | Config file could not be read |
//! | **Error** | `Config`, `Serialization` | Malformed TOML, unknown extension |

use std::fmt;

/// Result alias for [`CommonError`]
pub type CommonResult<T> = Result<T, CommonError>;

/// Failure while locating, reading or decoding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// The configuration source is unusable, optionally pinned to a field
    Config { message: String, field: Option<String> },

    /// A document could not be decoded in the named format
    Serialization { format: String, message: String },

    /// A filesystem operation failed
    Io { operation: String, message: String },

    /// A named resource does not exist
    NotFound { resource_type: String, identifier: String },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message, field: Some(field) } => {
                write!(f, "Invalid configuration ({field}): {message}")
            }
            Self::Config { message, field: None } => write!(f, "Invalid configuration: {message}"),
            Self::Serialization { format, message } => write!(f, "Invalid {format}: {message}"),
            Self::Io { operation, message } => write!(f, "Could not {operation} file: {message}"),
            Self::NotFound { resource_type, identifier } => {
                write!(f, "{resource_type} '{identifier}' does not exist")
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl CommonError {
    /// Configuration error not tied to a field
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), field: None }
    }

    pub fn config_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), field: Some(field.into()) }
    }

    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization { format: format.into(), message: message.into() }
    }

    pub fn io(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io { operation: operation.into(), message: message.into() }
    }

    /// `resource_type` named `identifier` is missing
    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound { resource_type: resource_type.into(), identifier: identifier.into() }
    }

    /// Key/value pairs for a structured log event
    ///
    /// The first pair is always `("error_type", <variant>)`; the rest are the
    /// variant's own fields, skipping an unset `field`.
    pub fn as_tracing_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("error_type", self.kind().to_string())];
        match self {
            Self::Config { message, field } => {
                if let Some(field) = field {
                    fields.push(("field", field.clone()));
                }
                fields.push(("message", message.clone()));
            }
            Self::Serialization { format, message } => {
                fields.push(("format", format.clone()));
                fields.push(("message", message.clone()));
            }
            Self::Io { operation, message } => {
                fields.push(("operation", operation.clone()));
                fields.push(("message", message.clone()));
            }
            Self::NotFound { resource_type, identifier } => {
                fields.push(("resource_type", resource_type.clone()));
                fields.push(("identifier", identifier.clone()));
            }
        }
        fields
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Serialization { .. } => "serialization",
            Self::Io { .. } => "io",
            Self::NotFound { .. } => "not_found",
        }
    }
}

/// Retryability and severity of an error
pub trait ErrorClassification {
    /// Whether repeating the operation unchanged may succeed
    fn is_retryable(&self) -> bool;

    /// Severity used to pick the log level
    fn severity(&self) -> ErrorSeverity;

    /// Whether the severity is [`ErrorSeverity::Critical`]
    fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }
}

/// Severity scale used to pick a log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Expected condition, logged for context
    Info,
    /// Degraded but recoverable
    Warning,
    /// Needs a fix before retrying
    Error,
    /// A broken invariant
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        })
    }
}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Info,
            Self::Io { .. } => ErrorSeverity::Warning,
            Self::Config { .. } | Self::Serialization { .. } => ErrorSeverity::Error,
        }
    }
}

impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        Self::io("access", err.to_string())
    }
}
