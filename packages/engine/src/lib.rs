//! Collision-safe batch rename engine for bulk-rename.
//!
//! This crate applies a mapping of old names to new names inside a single
//! directory as one logical batch:
//!
//! * Validation of every requested entry against the live directory
//! * Two-phase apply (stage every source under a placeholder name, then commit)
//! * Per-entry outcomes, including entries stranded at their placeholder name
//! * A [`DirectoryAccessor`] seam so the filesystem can be swapped out
//!
//! # Example
//!
//! ```rust,ignore
//! use bulk_rename_engine::{FsAccessor, RenameOptions, RenameRequest, rename_batch};
//!
//! let mut request = RenameRequest::new();
//! request.push("a.txt", "b.txt");
//! request.push("b.txt", "a.txt");
//!
//! let report = rename_batch(&request, &dir, &FsAccessor, &RenameOptions::default())?;
//! for record in report.records() {
//!     println!("{} -> {}: {}", record.old_name, record.new_name, record.outcome);
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod accessor;
mod apply;
mod error;
mod report;
mod request;
mod staging;
mod validate;

#[cfg(test)]
mod memory;

pub use accessor::{AccessorError, DirectoryAccessor, FsAccessor};
pub use apply::{RenameOptions, apply, apply_with_progress};
pub use error::{EngineError, RenameError};
pub use report::{RenameRecord, RenameReport, rename_batch, rename_batch_with_progress};
pub use request::{RenameEntry, RenameRequest};
pub use staging::{DEFAULT_STAGING_PREFIX, MAX_STAGING_ATTEMPTS, staged_name};
pub use validate::{Candidate, Validation, is_plain_name, validate};

/// Why an entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The mapping row has no new name.
    NoNewName,
    /// The new name equals the old name.
    Unchanged,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoNewName => write!(f, "no new name provided"),
            Self::Unchanged => write!(f, "name unchanged"),
        }
    }
}

/// Result of a single rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The entry now carries its new name.
    Applied,
    /// The entry was not touched.
    Skipped(SkipReason),
    /// The entry could not be renamed.
    Failed(RenameError),
}

impl RenameOutcome {
    /// Whether this outcome counts against the batch.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The placeholder name the entry is stuck at, if its final rename failed.
    ///
    /// Entries in this state are no longer under their old name and must be
    /// recovered by hand (or by a follow-up run that maps the placeholder name).
    #[must_use]
    pub fn stranded_at(&self) -> Option<&str> {
        match self {
            Self::Failed(RenameError::Commit { staged_name, .. }) => Some(staged_name),
            _ => None,
        }
    }
}

impl std::fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
            Self::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}
