//! Logging initialisation
//!
//! Installs a global `tracing` subscriber. The filter comes from `RUST_LOG`
//! (default `info`) and the output format from `DRAKO_LOG_FORMAT`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "DRAKO_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Observability error type
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    /// A global subscriber is already installed
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name; anything but `json` (case-insensitive) is text
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Read the format from `DRAKO_LOG_FORMAT`
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV).map(|value| Self::parse(&value)).unwrap_or_default()
    }
}

/// Install the global subscriber using the format from the environment
///
/// Call this once at process startup.
///
/// # Errors
/// Returns `ObservabilityError::Init` if a subscriber is already installed.
pub fn init() -> Result<(), ObservabilityError> {
    init_with(LogFormat::from_env())
}

/// Install the global subscriber with an explicit format
///
/// # Errors
/// Returns `ObservabilityError::Init` if a subscriber is already installed.
pub fn init_with(format: LogFormat) -> Result<(), ObservabilityError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?,
    }

    tracing::debug!(?format, "Tracing initialised");
    Ok(())
}
