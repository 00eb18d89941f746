//! Mapping table types.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use bulk_rename_engine::{RenameEntry, RenameRequest};
use serde::{Deserialize, Serialize};

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRow {
    /// Current name of the entry.
    pub old_name: String,

    /// Desired name. Missing or blank means "leave alone".
    #[serde(default)]
    pub new_name: Option<String>,
}

impl MappingRow {
    /// Create a row with a new name.
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: Some(new_name.into()),
        }
    }

    /// Create a row with an empty new name, ready to be filled in.
    #[must_use]
    pub fn blank(old_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: Some(String::new()),
        }
    }
}

/// A mapping table as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    /// Rows in table order.
    #[serde(default, rename = "rename")]
    pub rows: Vec<MappingRow>,
}

impl MappingFile {
    /// Convert the table into an engine request, keeping row order.
    #[must_use]
    pub fn into_request(self) -> RenameRequest {
        self.rows
            .into_iter()
            .map(|row| RenameEntry::new(row.old_name, row.new_name.unwrap_or_default()))
            .collect()
    }

    /// Number of rows with a non-blank new name.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.new_name.as_deref().is_some_and(|n| !n.trim().is_empty()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_keeps_order_and_blanks() {
        let file = MappingFile {
            rows: vec![
                MappingRow::new("b.txt", "a.txt"),
                MappingRow {
                    old_name: "c.txt".to_string(),
                    new_name: None,
                },
                MappingRow::new("a.txt", "b.txt"),
            ],
        };

        assert_eq!(file.filled_count(), 2);

        let request = file.into_request();
        let pairs: Vec<(&str, &str)> = request
            .entries()
            .iter()
            .map(|e| (e.old_name.as_str(), e.new_name.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![("b.txt", "a.txt"), ("c.txt", ""), ("a.txt", "b.txt")]
        );
    }
}
