//! Directory access used by the engine.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Opaque error reported by a [`DirectoryAccessor`].
///
/// Keeps the IO error kind so callers can tell "not found" apart from
/// permission or capacity problems, but is cheap to clone into per-entry
/// outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AccessorError {
    kind: io::ErrorKind,
    message: String,
}

impl AccessorError {
    /// Create an accessor error from a kind and message.
    #[must_use]
    pub fn new(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The IO error kind.
    #[must_use]
    pub const fn kind(&self) -> io::ErrorKind {
        self.kind
    }

    /// Whether the error means the path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == io::ErrorKind::NotFound
    }
}

impl From<io::Error> for AccessorError {
    fn from(error: io::Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Filesystem operations the engine needs.
pub trait DirectoryAccessor {
    /// List the names of all entries directly inside `dir`.
    ///
    /// # Errors
    ///
    /// * If the directory cannot be read
    fn list(&self, dir: &Path) -> Result<BTreeSet<String>, AccessorError>;

    /// Whether anything exists at `path` (dangling symlinks included).
    fn exists(&self, path: &Path) -> bool;

    /// Rename `from` to `to`.
    ///
    /// # Errors
    ///
    /// * If the underlying rename fails
    fn rename(&self, from: &Path, to: &Path) -> Result<(), AccessorError>;
}

/// [`DirectoryAccessor`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAccessor;

impl DirectoryAccessor for FsAccessor {
    fn list(&self, dir: &Path) -> Result<BTreeSet<String>, AccessorError> {
        let mut names = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => {
                    names.insert(name);
                }
                Err(raw) => {
                    log::warn!("Ignoring non UTF-8 entry name: {}", raw.to_string_lossy());
                }
            }
        }

        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AccessorError> {
        log::debug!("Renaming {} -> {}", from.display(), to.display());
        fs::rename(from, to).map_err(AccessorError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_accessor_list() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/nested.txt"), "nested").unwrap();

        let names = FsAccessor.list(dir.path()).unwrap();

        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["a.txt", "b.txt", "sub"]
        );
    }

    #[test]
    fn test_fs_accessor_list_missing_directory() {
        let dir = TempDir::new().unwrap();
        let error = FsAccessor.list(&dir.path().join("missing")).unwrap_err();
        assert!(error.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_accessor_exists_dangling_symlink() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        assert!(FsAccessor.exists(&link));
        assert!(!FsAccessor.exists(&dir.path().join("nowhere")));
    }

    #[test]
    fn test_fs_accessor_rename_missing_source() {
        let dir = TempDir::new().unwrap();
        let error = FsAccessor
            .rename(&dir.path().join("missing"), &dir.path().join("target"))
            .unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
