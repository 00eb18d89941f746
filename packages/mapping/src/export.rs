//! Build a mapping template from a directory listing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use bulk_rename_engine::DirectoryAccessor;
use bulk_rename_glob::NameFilter;

use crate::error::MappingError;
use crate::types::{MappingFile, MappingRow};

/// List the entries of `dir` as a mapping with blank new names.
///
/// Rows are sorted by name. Only entries directly inside `dir` are listed.
///
/// # Arguments
///
/// * `dir` - Directory to list
/// * `accessor` - Directory accessor used for listing
/// * `filter` - Which names to include
///
/// # Errors
///
/// * If `dir` does not exist
/// * If `dir` cannot be listed
pub fn export_template(
    dir: &Path,
    accessor: &dyn DirectoryAccessor,
    filter: &NameFilter,
) -> Result<MappingFile, MappingError> {
    log::debug!("Exporting entries of {}", dir.display());

    if !accessor.exists(dir) {
        return Err(MappingError::DirectoryNotFound(dir.to_path_buf()));
    }

    let names = accessor
        .list(dir)
        .map_err(|source| MappingError::ListError {
            path: dir.to_path_buf(),
            source,
        })?;

    let rows: Vec<MappingRow> = names
        .into_iter()
        .filter(|name| filter.matches(name))
        .map(MappingRow::blank)
        .collect();

    log::debug!("Exported {} entries", rows.len());

    Ok(MappingFile { rows })
}
