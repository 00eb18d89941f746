//! Placeholder names used while a batch is in flight.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::path::Path;

use crate::accessor::DirectoryAccessor;

/// Default prefix for placeholder names.
pub const DEFAULT_STAGING_PREFIX: &str = ".bulk-rename-";

/// How many placeholder names are tried per entry before giving up.
pub const MAX_STAGING_ATTEMPTS: usize = 64;

/// Build the placeholder name for `old_name` on the given attempt.
///
/// The name is deterministic so a stranded entry can be traced back to its
/// original name by eye: `.bulk-rename-0~report.txt`.
#[must_use]
pub fn staged_name(prefix: &str, attempt: usize, old_name: &str) -> String {
    format!("{prefix}{attempt}~{old_name}")
}

/// Pick a placeholder for `old_name` that is not in `taken` and does not exist
/// in `base`. The chosen name is added to `taken`.
///
/// Returns `None` when every attempt collides.
pub(crate) fn reserve_staged_name(
    accessor: &dyn DirectoryAccessor,
    base: &Path,
    prefix: &str,
    old_name: &str,
    taken: &mut BTreeSet<String>,
) -> Option<String> {
    for attempt in 0..MAX_STAGING_ATTEMPTS {
        let candidate = staged_name(prefix, attempt, old_name);

        if taken.contains(&candidate) || accessor.exists(&base.join(&candidate)) {
            log::debug!("Staging name {candidate} is taken, retrying");
            continue;
        }

        taken.insert(candidate.clone());
        return Some(candidate);
    }

    None
}
