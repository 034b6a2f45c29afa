//! Configuration loader
//!
//! Loads the billing configuration from a file named by the environment or
//! found in a standard location.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file from the working directory, if any
//! 2. Uses the path in `DRAKO_CONFIG` when it is set
//! 3. Otherwise probes multiple paths for config files
//! 4. Parses JSON or TOML, detected by file extension
//! 5. Validates the result, comparing accounting cutoffs from today
//!
//! ## File Locations
//! The loader probes the following names in the current working directory,
//! then in its parent and grandparent:
//! 1. `drako.toml`, `drako.json`
//! 2. `config.toml`, `config.json`

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use drako_common::error::{CommonError, CommonResult, ErrorClassification};
use drako_domain::{Config, DrakoError, Result};

/// Environment variable holding an explicit config file path
pub const CONFIG_PATH_ENV: &str = "DRAKO_CONFIG";

const CONFIG_FILE_NAMES: [&str; 4] = ["drako.toml", "drako.json", "config.toml", "config.json"];

/// Number of directories searched: the working directory and two ancestors
const PROBE_DEPTH: usize = 3;

/// Load configuration with automatic path resolution
///
/// # Errors
/// See [`load_from_file_at`].
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    match config_path_from_env() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using config path from {}", CONFIG_PATH_ENV);
            load_from_file(Some(path))
        }
        None => {
            tracing::debug!("{} not set, probing standard locations", CONFIG_PATH_ENV);
            load_from_file(None)
        }
    }
}

/// Path named by `DRAKO_CONFIG`, ignoring an empty value
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Load configuration from a file, validating it against today's date
///
/// If `path` is `None`, probes multiple locations for config files.
///
/// # Errors
/// See [`load_from_file_at`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    load_from_file_at(path, Local::now().date_naive())
}

/// Load configuration from a file, validating it against `anchor`
///
/// # Errors
/// Returns `DrakoError::NotFound` if `path` names a missing file.
///
/// Returns `DrakoError::Config` if:
/// - No config file found (when path is `None`)
/// - The file cannot be read
/// - File format is invalid or unsupported
///
/// Returns `DrakoError::Validation` if the configuration is inconsistent.
pub fn load_from_file_at(path: Option<PathBuf>, anchor: NaiveDate) -> Result<Config> {
    let (config_path, config) = read_config(path).map_err(|err| {
        tracing::warn!(
            severity = %err.severity(),
            fields = ?err.as_tracing_fields(),
            "Failed to load configuration"
        );
        DrakoError::from(err)
    })?;

    if let Err(errors) = config.validate(anchor) {
        tracing::warn!(
            path = %config_path.display(),
            error_count = errors.error_count(),
            "Configuration rejected"
        );
        return Err(errors.into());
    }

    tracing::info!(
        taxes = config.taxes.len(),
        items = config.items.len(),
        "Configuration loaded"
    );
    Ok(config)
}

fn read_config(path: Option<PathBuf>) -> CommonResult<(PathBuf, Config)> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => return Err(CommonError::not_found("Config file", p.display().to_string())),
        None => probe_config_paths().ok_or_else(|| {
            CommonError::config("no config file in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CommonError::io("read", e.to_string()))?;
    let config = parse_config(&contents, &config_path)?;
    Ok((config_path, config))
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> CommonResult<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents)?),
        "json" => Ok(serde_json::from_str(contents)?),
        _ => Err(CommonError::config_field("extension", format!("'{extension}' is not supported"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_from(&cwd)
}

fn probe_from(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .take(PROBE_DEPTH)
        .flat_map(|ancestor| CONFIG_FILE_NAMES.iter().map(move |name| ancestor.join(name)))
        .find(|path| path.is_file())
}
