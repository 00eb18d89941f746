//! Error types for rename operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

use crate::accessor::AccessorError;

/// Why a single entry could not be renamed.
///
/// These are recorded per entry inside [`crate::RenameOutcome::Failed`] and
/// never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// The mapping row has an empty old name.
    #[error("old name is blank")]
    BlankSource,

    /// A name does not refer to an entry directly inside the directory.
    #[error("invalid name {name:?}: must be a plain entry name")]
    InvalidName {
        /// The offending name.
        name: String,
    },

    /// The old name does not exist in the directory.
    #[error("source not found")]
    SourceNotFound,

    /// Another entry earlier in the batch already claims the same new name.
    #[error("duplicate target name")]
    DuplicateTarget,

    /// The new name belongs to an entry that is not being renamed away.
    #[error("target already exists")]
    TargetExists,

    /// The new name belongs to another entry of the batch that stays where it
    /// is (skipped, rejected or failed to move), so this entry keeps its old name.
    #[error("target {target} is occupied by an entry that stays in place")]
    TargetBlocked {
        /// The blocked new name.
        target: String,
    },

    /// No free placeholder name could be found.
    #[error("no free staging name after {attempts} attempts")]
    StagingExhausted {
        /// Number of candidate names tried.
        attempts: usize,
    },

    /// Moving the entry to its placeholder name failed. The entry is untouched.
    #[error("failed to stage as {staged_name}: {source}")]
    Stage {
        /// The placeholder name that was attempted.
        staged_name: String,
        /// The underlying accessor error.
        #[source]
        source: AccessorError,
    },

    /// Moving the entry from its placeholder to the new name failed.
    ///
    /// The entry remains on disk under `staged_name`.
    #[error("failed to commit, entry left as {staged_name}: {source}")]
    Commit {
        /// Name the entry currently has on disk.
        staged_name: String,
        /// The underlying accessor error.
        #[source]
        source: AccessorError,
    },
}

/// Errors that stop a batch before any entry is touched.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The base directory does not exist.
    #[error("Directory does not exist: {}", path.display())]
    DirectoryNotFound {
        /// The directory path.
        path: PathBuf,
    },

    /// The placeholder prefix would not produce plain entry names.
    #[error("Invalid staging prefix {prefix:?}: must be a non-empty name without path separators")]
    InvalidStagingPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// The base directory could not be listed.
    #[error("Failed to list directory {}: {source}", path.display())]
    ListError {
        /// The directory path.
        path: PathBuf,
        /// The underlying accessor error.
        #[source]
        source: AccessorError,
    },
}
