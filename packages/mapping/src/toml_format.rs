//! TOML mapping files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::MappingError;
use crate::types::MappingFile;

/// Load a TOML mapping file.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as a mapping table
pub fn load_toml_mapping(path: &Path) -> Result<MappingFile, MappingError> {
    log::debug!("Loading TOML mapping from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| MappingError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mapping: MappingFile =
        toml::from_str(&content).map_err(|e| MappingError::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::debug!("Loaded {} mapping rows", mapping.rows.len());

    Ok(mapping)
}

/// Render a mapping as TOML.
///
/// # Errors
///
/// * If the mapping cannot be serialized
pub fn render_toml_mapping(mapping: &MappingFile, path: &Path) -> Result<String, MappingError> {
    toml::to_string(mapping).map_err(|e| MappingError::TomlSerializeError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::types::MappingRow;

    #[test]
    fn test_load_toml_mapping() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[rename]]
oldName = "IMG_0001.jpg"
newName = "beach.jpg"

[[rename]]
oldName = "IMG_0002.jpg"

[[rename]]
oldName = "notes"
newName = ""
"#
        )
        .unwrap();

        let mapping = load_toml_mapping(file.path()).unwrap();

        assert_eq!(
            mapping.rows,
            vec![
                MappingRow::new("IMG_0001.jpg", "beach.jpg"),
                MappingRow {
                    old_name: "IMG_0002.jpg".to_string(),
                    new_name: None,
                },
                MappingRow::blank("notes"),
            ]
        );
    }

    #[test]
    fn test_load_toml_mapping_missing_old_name() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[rename]]\nnewName = \"x\"").unwrap();

        let error = load_toml_mapping(file.path()).unwrap_err();

        assert!(matches!(error, MappingError::TomlParseError { .. }));
    }

    #[test]
    fn test_load_empty_toml_mapping() {
        let file = NamedTempFile::new().unwrap();

        let mapping = load_toml_mapping(file.path()).unwrap();

        assert!(mapping.rows.is_empty());
    }

    #[test]
    fn test_render_toml_mapping() {
        let mapping = MappingFile {
            rows: vec![MappingRow::blank("a.txt"), MappingRow::new("b.txt", "c.txt")],
        };

        let rendered = render_toml_mapping(&mapping, Path::new("rename.toml")).unwrap();
        let parsed: MappingFile = toml::from_str(&rendered).unwrap();

        assert!(rendered.contains("[[rename]]"));
        assert!(rendered.contains("oldName = \"a.txt\""));
        assert_eq!(parsed, mapping);
    }
}
