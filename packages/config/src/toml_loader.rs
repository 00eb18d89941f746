//! TOML settings file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Settings;

/// Load a TOML settings file.
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
/// * If `stagingPrefix` is empty or contains a path separator
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    log::debug!("Loading settings from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(prefix) = &settings.staging_prefix {
        let problem = if prefix.is_empty() {
            Some("must not be empty")
        } else if prefix.contains(std::path::is_separator) {
            Some("must not contain a path separator")
        } else {
            None
        };

        if let Some(message) = problem {
            return Err(ConfigError::InvalidValue {
                path: path.to_path_buf(),
                field: "stagingPrefix",
                message: message.to_string(),
            });
        }
    }

    log::debug!("Loaded settings: {settings:?}");

    Ok(settings)
}
