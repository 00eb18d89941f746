//! Rename request types.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// A single requested rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// Current name of the entry inside the base directory.
    pub old_name: String,
    /// Desired name. Blank means "leave this entry alone".
    pub new_name: String,
}

impl RenameEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

/// Ordered set of renames to apply as one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameRequest {
    entries: Vec<RenameEntry>,
}

impl RenameRequest {
    /// Create an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a rename.
    pub fn push(&mut self, old_name: impl Into<String>, new_name: impl Into<String>) {
        self.entries.push(RenameEntry::new(old_name, new_name));
    }

    /// The entries in request order.
    #[must_use]
    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the request has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RenameEntry> for RenameRequest {
    fn from_iter<T: IntoIterator<Item = RenameEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<O: Into<String>, N: Into<String>> FromIterator<(O, N)> for RenameRequest {
    fn from_iter<T: IntoIterator<Item = (O, N)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(old_name, new_name)| RenameEntry::new(old_name, new_name))
            .collect()
    }
}
