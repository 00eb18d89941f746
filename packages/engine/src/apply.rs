//! Two-phase batch application.
//!
//! Every candidate is first moved to a placeholder name (stage), and only once
//! all of them are out of the way does any candidate take its final name
//! (commit). This turns swaps and cycles into plain renames onto free names.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::RenameOutcome;
use crate::accessor::DirectoryAccessor;
use crate::error::{EngineError, RenameError};
use crate::staging::{DEFAULT_STAGING_PREFIX, MAX_STAGING_ATTEMPTS, reserve_staged_name};
use crate::validate::{Candidate, is_plain_name};

/// Options for a rename batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Prefix for placeholder names.
    pub staging_prefix: String,
    /// Fail all but the first candidate that targets the same new name.
    pub reject_duplicate_targets: bool,
    /// Fail candidates whose target exists and is not being renamed away.
    pub protect_bystanders: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            staging_prefix: DEFAULT_STAGING_PREFIX.to_string(),
            reject_duplicate_targets: false,
            protect_bystanders: false,
        }
    }
}

/// Per-candidate progress through the batch.
#[derive(Debug)]
enum EntryState {
    Staged(String),
    Done(RenameOutcome),
}

/// Apply validated candidates.
///
/// # Arguments
///
/// * `candidates` - Entries returned by [`crate::validate`]
/// * `base` - Directory containing the entries
/// * `accessor` - Directory accessor performing the renames
/// * `options` - Staging options
///
/// # Returns
///
/// One `(request index, outcome)` pair per candidate, in candidate order.
///
/// When several candidates share an old name, the first one moves the entry
/// and the later ones fail with [`RenameError::SourceNotFound`].
///
/// # Errors
///
/// * If the staging prefix is not a plain name
/// * If `base` cannot be listed
pub fn apply(
    candidates: &[Candidate],
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
) -> Result<Vec<(usize, RenameOutcome)>, EngineError> {
    apply_with_progress(candidates, base, accessor, options, |_, _| {})
}

/// Apply validated candidates with a progress callback.
///
/// The callback receives `(steps_completed, steps_total)`; every candidate
/// counts for two steps (stage and commit).
///
/// # Errors
///
/// * If the staging prefix is not a plain name
/// * If `base` cannot be listed
pub fn apply_with_progress<F>(
    candidates: &[Candidate],
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
    on_progress: F,
) -> Result<Vec<(usize, RenameOutcome)>, EngineError>
where
    F: Fn(u64, u64),
{
    log::info!(
        "Renaming {} entries in {}",
        candidates.len(),
        base.display()
    );

    if !is_plain_name(&options.staging_prefix) {
        return Err(EngineError::InvalidStagingPrefix {
            prefix: options.staging_prefix.clone(),
        });
    }

    let total = candidates.len() as u64 * 2;
    let mut completed = 0u64;

    // Placeholders must not collide with anything on disk or any final name.
    let mut taken = accessor
        .list(base)
        .map_err(|source| EngineError::ListError {
            path: base.to_path_buf(),
            source,
        })?;
    taken.extend(candidates.iter().map(|c| c.new_name.clone()));

    // Names still occupied by an entry from this batch after staging.
    let mut held: HashSet<String> = HashSet::new();

    let mut states = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let state = stage(candidate, base, accessor, options, &mut taken, &mut held);
        states.push(state);
        completed += 1;
        on_progress(completed, total);
    }

    let restore = entries_to_restore(candidates, &states, held);

    let mut outcomes = Vec::with_capacity(candidates.len());
    for ((position, candidate), state) in candidates.iter().enumerate().zip(states) {
        let outcome = match state {
            EntryState::Done(outcome) => outcome,
            EntryState::Staged(staged_name) if restore.contains(&position) => {
                unstage(candidate, &staged_name, base, accessor)
            }
            EntryState::Staged(staged_name) => commit(candidate, &staged_name, base, accessor),
        };

        if let RenameOutcome::Failed(error) = &outcome {
            log::warn!("{} -> {}: {error}", candidate.old_name, candidate.new_name);
        }

        outcomes.push((candidate.index, outcome));
        completed += 1;
        on_progress(completed, total);
    }

    Ok(outcomes)
}

fn stage(
    candidate: &Candidate,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
    taken: &mut BTreeSet<String>,
    held: &mut HashSet<String>,
) -> EntryState {
    let source = base.join(&candidate.old_name);

    let Some(staged_name) = reserve_staged_name(
        accessor,
        base,
        &options.staging_prefix,
        &candidate.old_name,
        taken,
    ) else {
        held.insert(candidate.old_name.clone());
        return EntryState::Done(RenameOutcome::Failed(RenameError::StagingExhausted {
            attempts: MAX_STAGING_ATTEMPTS,
        }));
    };

    log::debug!("Staging {} as {staged_name}", candidate.old_name);

    match accessor.rename(&source, &base.join(&staged_name)) {
        Ok(()) => EntryState::Staged(staged_name),
        Err(error) => {
            // A duplicate old name or an external delete leaves nothing behind.
            if accessor.exists(&source) {
                held.insert(candidate.old_name.clone());
            }
            let failure = if error.is_not_found() {
                RenameError::SourceNotFound
            } else {
                RenameError::Stage {
                    staged_name,
                    source: error,
                }
            };
            EntryState::Done(RenameOutcome::Failed(failure))
        }
    }
}

/// Staged candidates whose target is still held by an entry of this batch.
///
/// Committing them would overwrite that entry, so they go back to their old
/// name instead, which in turn holds that name for anyone targeting it.
fn entries_to_restore(
    candidates: &[Candidate],
    states: &[EntryState],
    mut held: HashSet<String>,
) -> HashSet<usize> {
    let mut restore = HashSet::new();

    loop {
        let mut changed = false;

        for (position, (candidate, state)) in candidates.iter().zip(states).enumerate() {
            if matches!(state, EntryState::Staged(_))
                && !restore.contains(&position)
                && held.contains(&candidate.new_name)
            {
                restore.insert(position);
                held.insert(candidate.old_name.clone());
                changed = true;
            }
        }

        if !changed {
            return restore;
        }
    }
}

fn commit(
    candidate: &Candidate,
    staged_name: &str,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
) -> RenameOutcome {
    log::debug!("Committing {staged_name} as {}", candidate.new_name);

    match accessor.rename(&base.join(staged_name), &base.join(&candidate.new_name)) {
        Ok(()) => RenameOutcome::Applied,
        Err(source) => RenameOutcome::Failed(RenameError::Commit {
            staged_name: staged_name.to_string(),
            source,
        }),
    }
}

fn unstage(
    candidate: &Candidate,
    staged_name: &str,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
) -> RenameOutcome {
    log::debug!(
        "Restoring {staged_name} to {}: target {} is still occupied",
        candidate.old_name,
        candidate.new_name
    );

    match accessor.rename(&base.join(staged_name), &base.join(&candidate.old_name)) {
        Ok(()) => RenameOutcome::Failed(RenameError::TargetBlocked {
            target: candidate.new_name.clone(),
        }),
        Err(source) => RenameOutcome::Failed(RenameError::Commit {
            staged_name: staged_name.to_string(),
            source,
        }),
    }
}
