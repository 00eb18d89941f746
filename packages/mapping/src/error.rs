//! Error types for mapping files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing mapping files.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Failed to read the mapping file.
    #[error("Failed to read mapping file {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the mapping file.
    #[error("Failed to write mapping file {}: {source}", path.display())]
    WriteError {
        /// Path to the file that couldn't be written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a TOML mapping.
    #[error("Failed to parse TOML mapping {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to serialize a TOML mapping.
    #[error("Failed to serialize TOML mapping {}: {source}", path.display())]
    TomlSerializeError {
        /// Path to the file being written.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to parse or serialize a JSON mapping.
    #[error("Failed to process JSON mapping {}: {source}", path.display())]
    JsonError {
        /// Path to the file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported mapping format.
    #[error("Unsupported mapping format: {0:?} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// The directory to export does not exist.
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The directory to export could not be listed.
    #[error("Failed to list directory {}: {source}", path.display())]
    ListError {
        /// The directory path.
        path: PathBuf,
        /// The underlying accessor error.
        #[source]
        source: bulk_rename_engine::AccessorError,
    },
}
