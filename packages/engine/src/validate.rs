//! Request validation - decide which entries can take part in the apply phase.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashSet;
use std::path::Path;

use crate::accessor::DirectoryAccessor;
use crate::apply::RenameOptions;
use crate::error::{EngineError, RenameError};
use crate::request::RenameRequest;
use crate::{RenameOutcome, SkipReason};

/// An entry that passed validation and will be staged and committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the entry in the original request.
    pub index: usize,
    /// Current name.
    pub old_name: String,
    /// Final name.
    pub new_name: String,
}

/// Result of validating a request.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// Entries to apply, in request order.
    pub candidates: Vec<Candidate>,
    /// One slot per request entry: `Some` when the outcome is already decided,
    /// `None` when the entry is a candidate.
    pub outcomes: Vec<Option<RenameOutcome>>,
}

impl Validation {
    /// Outcomes decided during validation, with their request index.
    pub fn decided(&self) -> impl Iterator<Item = (usize, &RenameOutcome)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.as_ref().map(|o| (index, o)))
    }

    /// Whether any entry already failed validation.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.decided().any(|(_, outcome)| outcome.is_failure())
    }
}

/// Whether `name` refers to an entry directly inside a directory.
///
/// Rejects empty names, `.`, `..`, and anything containing a path separator
/// or a NUL byte.
#[must_use]
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(std::path::is_separator)
        && !name.contains('\0')
}

/// Validate a request against the current contents of `base`.
///
/// Does not modify the directory.
///
/// # Arguments
///
/// * `request` - The requested renames
/// * `base` - Directory containing the entries
/// * `accessor` - Directory accessor used for existence checks
/// * `options` - Which optional target checks to run
///
/// # Errors
///
/// * If `base` does not exist
pub fn validate(
    request: &RenameRequest,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
) -> Result<Validation, EngineError> {
    log::debug!(
        "Validating {} rename entries in {}",
        request.len(),
        base.display()
    );

    if !accessor.exists(base) {
        return Err(EngineError::DirectoryNotFound {
            path: base.to_path_buf(),
        });
    }

    let mut validation = Validation {
        candidates: Vec::new(),
        outcomes: Vec::with_capacity(request.len()),
    };

    for (index, entry) in request.entries().iter().enumerate() {
        let decided = if entry.old_name.trim().is_empty() {
            Some(RenameOutcome::Failed(RenameError::BlankSource))
        } else if entry.new_name.trim().is_empty() {
            Some(RenameOutcome::Skipped(SkipReason::NoNewName))
        } else if !is_plain_name(&entry.old_name) {
            Some(invalid_name(&entry.old_name))
        } else if !is_plain_name(&entry.new_name) {
            Some(invalid_name(&entry.new_name))
        } else if !accessor.exists(&base.join(&entry.old_name)) {
            Some(RenameOutcome::Failed(RenameError::SourceNotFound))
        } else if entry.new_name == entry.old_name {
            Some(RenameOutcome::Skipped(SkipReason::Unchanged))
        } else {
            None
        };

        if decided.is_none() {
            validation.candidates.push(Candidate {
                index,
                old_name: entry.old_name.clone(),
                new_name: entry.new_name.clone(),
            });
        }
        validation.outcomes.push(decided);
    }

    if options.reject_duplicate_targets {
        reject_duplicate_targets(&mut validation);
    }

    if options.protect_bystanders {
        protect_bystanders(&mut validation, base, accessor);
    }

    block_pinned_targets(&mut validation, request, base, accessor);

    log::debug!(
        "{} of {} entries are ready to rename",
        validation.candidates.len(),
        request.len()
    );

    Ok(validation)
}

fn invalid_name(name: &str) -> RenameOutcome {
    RenameOutcome::Failed(RenameError::InvalidName {
        name: name.to_string(),
    })
}

/// Keep the first candidate for each target name, fail the rest.
fn reject_duplicate_targets(validation: &mut Validation) {
    let mut seen: HashSet<String> = HashSet::new();
    let outcomes = &mut validation.outcomes;

    validation.candidates.retain(|candidate| {
        if seen.insert(candidate.new_name.clone()) {
            return true;
        }
        log::debug!(
            "Rejecting {}: target {} is already claimed",
            candidate.old_name,
            candidate.new_name
        );
        outcomes[candidate.index] = Some(RenameOutcome::Failed(RenameError::DuplicateTarget));
        false
    });
}

/// Fail candidates whose target exists and is not itself being renamed away.
fn protect_bystanders(validation: &mut Validation, base: &Path, accessor: &dyn DirectoryAccessor) {
    let moving: HashSet<String> = validation
        .candidates
        .iter()
        .map(|candidate| candidate.old_name.clone())
        .collect();
    let outcomes = &mut validation.outcomes;

    validation.candidates.retain(|candidate| {
        let occupied = !moving.contains(&candidate.new_name)
            && accessor.exists(&base.join(&candidate.new_name));
        if !occupied {
            return true;
        }
        log::debug!(
            "Refusing to overwrite {} with {}",
            candidate.new_name,
            candidate.old_name
        );
        outcomes[candidate.index] = Some(RenameOutcome::Failed(RenameError::TargetExists));
        false
    });
}

/// Fail candidates whose target is an entry of the request that stays in place.
///
/// Entries decided during validation keep their name on disk. A candidate
/// targeting one of them stays too, which pins its own old name in turn.
fn block_pinned_targets(
    validation: &mut Validation,
    request: &RenameRequest,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
) {
    let mut pinned: HashSet<String> = validation
        .decided()
        .map(|(index, _)| &request.entries()[index].old_name)
        .filter(|name| is_plain_name(name) && accessor.exists(&base.join(name)))
        .cloned()
        .collect();

    loop {
        // A name moved away by some candidate is free, even if another row keeps it.
        let moving: HashSet<String> = validation
            .candidates
            .iter()
            .map(|candidate| candidate.old_name.clone())
            .collect();
        let outcomes = &mut validation.outcomes;
        let mut newly_pinned = Vec::new();

        validation.candidates.retain(|candidate| {
            if !pinned.contains(&candidate.new_name) || moving.contains(&candidate.new_name) {
                return true;
            }
            log::debug!(
                "Keeping {}: target {} stays in place",
                candidate.old_name,
                candidate.new_name
            );
            outcomes[candidate.index] = Some(RenameOutcome::Failed(RenameError::TargetBlocked {
                target: candidate.new_name.clone(),
            }));
            newly_pinned.push(candidate.old_name.clone());
            false
        });

        if newly_pinned.is_empty() {
            return;
        }
        pinned.extend(newly_pinned);
    }
}
