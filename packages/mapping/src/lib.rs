//! Rename mapping files for bulk-rename.
//!
//! A mapping is a two-column table of `oldName` and `newName`. This crate reads
//! and writes it, and builds a blank template from a directory listing.
//!
//! # Supported Formats
//!
//! * TOML (`rename.toml`) - an array of `[[rename]]` tables
//! * JSON (`rename.json`) - `{ "rename": [ { "oldName": ..., "newName": ... } ] }`
//!
//! # Example
//!
//! ```rust,ignore
//! use bulk_rename_mapping::{export_template, load_mapping, save_mapping};
//!
//! let template = export_template(&dir, &FsAccessor, &NameFilter::default())?;
//! save_mapping(&dir.join("rename.toml"), &template)?;
//!
//! // ... the user fills in newName ...
//!
//! let request = load_mapping(&dir.join("rename.toml"))?.into_request();
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod export;
mod json_format;
mod toml_format;
mod types;

pub use error::MappingError;
pub use export::export_template;
pub use json_format::{load_json_mapping, render_json_mapping};
pub use toml_format::{load_toml_mapping, render_toml_mapping};
pub use types::{MappingFile, MappingRow};

use std::fs;
use std::path::Path;

/// Supported on-disk mapping formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    /// TOML array of tables.
    Toml,
    /// JSON object.
    Json,
}

impl MappingFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// * If the extension is not `toml` or `json`
    pub fn from_path(path: &Path) -> Result<Self, MappingError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(MappingError::UnsupportedFormat(extension.to_string())),
        }
    }
}

/// Load a mapping file, auto-detecting the format based on extension.
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_mapping(path: &Path) -> Result<MappingFile, MappingError> {
    match MappingFormat::from_path(path)? {
        MappingFormat::Toml => load_toml_mapping(path),
        MappingFormat::Json => load_json_mapping(path),
    }
}

/// Write a mapping file, choosing the format based on extension.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the mapping cannot be serialized
/// * If the file or its parent directory cannot be written
pub fn save_mapping(path: &Path, mapping: &MappingFile) -> Result<(), MappingError> {
    let content = match MappingFormat::from_path(path)? {
        MappingFormat::Toml => render_toml_mapping(mapping, path)?,
        MappingFormat::Json => render_json_mapping(mapping, path)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MappingError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    log::debug!(
        "Writing {} mapping rows to {}",
        mapping.rows.len(),
        path.display()
    );

    fs::write(path, content).map_err(|e| MappingError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
