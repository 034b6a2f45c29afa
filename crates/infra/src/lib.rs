//! # Drako Infrastructure
//!
//! Impure edges of Drako.
//!
//! This crate contains:
//! - Configuration loading from files and the environment (JSON, TOML)
//! - Tracing subscriber initialisation
//!
//! ## Architecture
//! - Depends on `drako-domain` for the configuration model
//! - Contains all "impure" code (file system, environment, global logger)

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use config::{load, load_from_file, load_from_file_at, probe_config_paths};
pub use observability::{init as init_tracing, LogFormat};
