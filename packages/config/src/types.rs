//! Settings types for bulk-rename.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default mapping file name, relative to the target directory.
pub const DEFAULT_MAPPING_FILE: &str = "rename.toml";

fn default_mapping_file() -> String {
    DEFAULT_MAPPING_FILE.to_string()
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Prefix for placeholder names used while a batch is applied.
    /// `None` keeps the engine's default.
    #[serde(default)]
    pub staging_prefix: Option<String>,

    /// Fail all but the first entry that targets the same new name.
    #[serde(default)]
    pub reject_duplicate_targets: bool,

    /// Refuse to rename onto an entry that is not itself being renamed away.
    #[serde(default)]
    pub protect_bystanders: bool,

    /// Mapping file used when none is given on the command line.
    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,

    /// Whether exported templates list dot-entries.
    #[serde(default)]
    pub include_hidden: bool,

    /// Glob patterns for names that are never exported.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            staging_prefix: None,
            reject_duplicate_targets: false,
            protect_bystanders: false,
            mapping_file: default_mapping_file(),
            include_hidden: false,
            exclude: Vec::new(),
        }
    }
}

/// Settings together with where they came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    /// The parsed settings.
    pub settings: Settings,
    /// File the settings were read from, or `None` for built-in defaults.
    pub source: Option<PathBuf>,
}
