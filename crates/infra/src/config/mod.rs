//! Configuration loading
//!
//! This module locates a billing configuration file, parses it and validates
//! it before handing it to the rest of the application.

pub mod loader;

// Re-export commonly used items
pub use loader::{
    config_path_from_env, load, load_from_file, load_from_file_at, probe_config_paths,
    CONFIG_PATH_ENV,
};
