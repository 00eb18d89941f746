//! In-memory directory used by the engine tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::accessor::{AccessorError, DirectoryAccessor};

/// Flat in-memory directory. Each entry's content is the name it was created
/// with, so tests can follow an entry's identity across renames.
#[derive(Debug, Default)]
pub struct MemoryAccessor {
    entries: RefCell<BTreeMap<PathBuf, String>>,
    fail_from: RefCell<BTreeSet<PathBuf>>,
    fail_to: RefCell<BTreeSet<PathBuf>>,
    fail_list: Cell<bool>,
    renames: Cell<usize>,
}

impl MemoryAccessor {
    pub fn base() -> PathBuf {
        PathBuf::from("/virtual")
    }

    pub fn with_entries<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accessor = Self::default();
        {
            let mut entries = accessor.entries.borrow_mut();
            for name in names {
                let name = name.into();
                entries.insert(Self::base().join(&name), name);
            }
        }
        accessor
    }

    /// Make any rename whose source is `name` fail with permission denied.
    pub fn fail_rename_from(&self, name: &str) {
        self.fail_from.borrow_mut().insert(Self::base().join(name));
    }

    /// Make any rename whose target is `name` fail with permission denied.
    pub fn fail_rename_to(&self, name: &str) {
        self.fail_to.borrow_mut().insert(Self::base().join(name));
    }

    pub fn fail_list(&self) {
        self.fail_list.set(true);
    }

    /// Original name of the entry currently called `name`.
    pub fn content(&self, name: &str) -> Option<String> {
        self.entries.borrow().get(&Self::base().join(name)).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries
            .borrow()
            .keys()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect()
    }

    pub fn rename_count(&self) -> usize {
        self.renames.get()
    }
}

impl DirectoryAccessor for MemoryAccessor {
    fn list(&self, dir: &Path) -> Result<BTreeSet<String>, AccessorError> {
        if self.fail_list.get() || dir != Self::base() {
            return Err(AccessorError::new(
                io::ErrorKind::NotFound,
                "directory not found",
            ));
        }
        Ok(self.names().into_iter().collect())
    }

    fn exists(&self, path: &Path) -> bool {
        path == Self::base() || self.entries.borrow().contains_key(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AccessorError> {
        if self.fail_from.borrow().contains(from) || self.fail_to.borrow().contains(to) {
            return Err(AccessorError::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        let mut entries = self.entries.borrow_mut();
        let content = entries.remove(from).ok_or_else(|| {
            AccessorError::new(io::ErrorKind::NotFound, "no such file or directory")
        })?;
        entries.insert(to.to_path_buf(), content);
        self.renames.set(self.renames.get() + 1);
        Ok(())
    }
}
