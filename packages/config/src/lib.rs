//! Settings loading for bulk-rename.
//!
//! This crate provides the user settings type and its discovery for the
//! bulk-rename CLI. Settings are plain TOML:
//!
//! * `<dir>/bulk-rename.toml` - Settings for one directory
//! * `<config dir>/bulk-rename/config.toml` - Per-user settings
//!
//! # Example
//!
//! ```rust,ignore
//! use bulk_rename_config::discover_settings;
//!
//! let loaded = discover_settings(Path::new("/path/to/photos"))?;
//! println!("mapping file: {}", loaded.settings.mapping_file);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{
    LOCAL_SETTINGS_FILE, discover_settings, discover_settings_in, settings_candidates,
    user_settings_path,
};
pub use error::ConfigError;
pub use toml_loader::load_settings;
pub use types::{DEFAULT_MAPPING_FILE, LoadedSettings, Settings};
