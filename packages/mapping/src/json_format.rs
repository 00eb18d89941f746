//! JSON mapping files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::MappingError;
use crate::types::MappingFile;

/// Load a JSON mapping file.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as a mapping table
pub fn load_json_mapping(path: &Path) -> Result<MappingFile, MappingError> {
    log::debug!("Loading JSON mapping from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| MappingError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| MappingError::JsonError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render a mapping as pretty-printed JSON.
///
/// # Errors
///
/// * If the mapping cannot be serialized
pub fn render_json_mapping(mapping: &MappingFile, path: &Path) -> Result<String, MappingError> {
    serde_json::to_string_pretty(mapping)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| MappingError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })
}
