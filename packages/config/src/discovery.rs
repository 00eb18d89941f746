//! Settings file discovery.
//!
//! Looks for a settings file next to the directory being renamed first, then in
//! the user's configuration directory.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::toml_loader::load_settings;
use crate::types::LoadedSettings;

/// Settings file name looked up inside the target directory.
pub const LOCAL_SETTINGS_FILE: &str = "bulk-rename.toml";

/// Path of the per-user settings file, if the platform has a config directory.
#[must_use]
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bulk-rename").join("config.toml"))
}

/// Candidate settings files for `base`, in lookup order.
#[must_use]
pub fn settings_candidates(base: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![base.join(LOCAL_SETTINGS_FILE)];
    candidates.extend(user_settings_path());
    candidates
}

/// Find and load the settings that apply to `base`.
///
/// Falls back to the built-in defaults when no settings file exists.
///
/// # Arguments
///
/// * `base` - The directory whose entries are being renamed
///
/// # Errors
///
/// * If a settings file exists but cannot be read or parsed
pub fn discover_settings(base: &Path) -> Result<LoadedSettings, ConfigError> {
    discover_settings_in(&settings_candidates(base))
}

/// Load the first existing file among `candidates`.
///
/// # Errors
///
/// * If the first existing file cannot be read or parsed
pub fn discover_settings_in(candidates: &[PathBuf]) -> Result<LoadedSettings, ConfigError> {
    for path in candidates {
        if path.is_file() {
            log::debug!("Using settings from {}", path.display());
            return Ok(LoadedSettings {
                settings: load_settings(path)?,
                source: Some(path.clone()),
            });
        }
        log::debug!("No settings at {}", path.display());
    }

    log::debug!("Using default settings");
    Ok(LoadedSettings::default())
}
