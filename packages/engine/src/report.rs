//! Batch report and the top-level rename entry points.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::RenameOutcome;
use crate::accessor::DirectoryAccessor;
use crate::apply::{RenameOptions, apply_with_progress};
use crate::error::EngineError;
use crate::request::RenameRequest;
use crate::validate::validate;

/// Outcome of one request entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// Requested old name.
    pub old_name: String,
    /// Requested new name.
    pub new_name: String,
    /// What happened.
    pub outcome: RenameOutcome,
}

/// Ordered per-entry results of a batch, one record per request entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    records: Vec<RenameRecord>,
}

impl RenameReport {
    /// Records in request order.
    #[must_use]
    pub fn records(&self) -> &[RenameRecord] {
        &self.records
    }

    /// Whether any entry failed.
    #[must_use]
    pub fn had_failures(&self) -> bool {
        self.records.iter().any(|r| r.outcome.is_failure())
    }

    /// Number of entries renamed.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, RenameOutcome::Applied))
    }

    /// Number of entries left alone on purpose.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, RenameOutcome::Skipped(_)))
    }

    /// Number of failed entries.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(RenameOutcome::is_failure)
    }

    /// Entries stuck at a placeholder name, with that name.
    pub fn stranded(&self) -> impl Iterator<Item = (&RenameRecord, &str)> {
        self.records
            .iter()
            .filter_map(|record| record.outcome.stranded_at().map(|name| (record, name)))
    }

    fn count(&self, predicate: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

/// Validate and apply a rename request.
///
/// # Arguments
///
/// * `request` - The requested renames
/// * `base` - Directory containing the entries
/// * `accessor` - Directory accessor performing the renames
/// * `options` - Batch options
///
/// # Errors
///
/// * If `base` does not exist or cannot be listed
pub fn rename_batch(
    request: &RenameRequest,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
) -> Result<RenameReport, EngineError> {
    rename_batch_with_progress(request, base, accessor, options, |_, _| {})
}

/// Validate and apply a rename request with a progress callback.
///
/// See [`apply_with_progress`] for the callback arguments.
///
/// # Errors
///
/// * If `base` does not exist or cannot be listed
pub fn rename_batch_with_progress<F>(
    request: &RenameRequest,
    base: &Path,
    accessor: &dyn DirectoryAccessor,
    options: &RenameOptions,
    on_progress: F,
) -> Result<RenameReport, EngineError>
where
    F: Fn(u64, u64),
{
    let validation = validate(request, base, accessor, options)?;
    let mut outcomes = validation.outcomes;

    for (index, outcome) in
        apply_with_progress(&validation.candidates, base, accessor, options, on_progress)?
    {
        outcomes[index] = Some(outcome);
    }

    let records = request
        .entries()
        .iter()
        .zip(outcomes)
        .filter_map(|(entry, outcome)| {
            outcome.map(|outcome| RenameRecord {
                old_name: entry.old_name.clone(),
                new_name: entry.new_name.clone(),
                outcome,
            })
        })
        .collect();

    let report = RenameReport { records };
    log::info!(
        "Batch finished: {} applied, {} skipped, {} failed",
        report.applied_count(),
        report.skipped_count(),
        report.failed_count()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    use crate::accessor::FsAccessor;
    use crate::error::RenameError;
    use crate::{DEFAULT_STAGING_PREFIX, SkipReason};

    fn write_files(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), format!("content of {name}")).unwrap();
        }
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    fn run(dir: &Path, pairs: &[(&str, &str)]) -> RenameReport {
        let request: RenameRequest = pairs.iter().copied().collect();
        rename_batch(&request, dir, &FsAccessor, &RenameOptions::default()).unwrap()
    }

    #[test]
    fn test_rename_batch_non_colliding() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a.txt", "b.txt", "untouched.txt"]);

        let report = run(dir.path(), &[("a.txt", "alpha.txt"), ("b.txt", "beta.txt")]);

        assert!(!report.had_failures());
        assert_eq!(report.applied_count(), 2);
        assert_eq!(
            listing(dir.path()),
            vec!["alpha.txt", "beta.txt", "untouched.txt"]
        );
        assert_eq!(read(dir.path(), "alpha.txt"), "content of a.txt");
        assert_eq!(read(dir.path(), "untouched.txt"), "content of untouched.txt");
    }

    #[test]
    fn test_rename_batch_swap_files() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["A", "B"]);

        let report = run(dir.path(), &[("A", "B"), ("B", "A")]);

        assert!(!report.had_failures());
        assert_eq!(read(dir.path(), "A"), "content of B");
        assert_eq!(read(dir.path(), "B"), "content of A");
        assert_eq!(listing(dir.path()), vec!["A", "B"]);
    }

    #[test]
    fn test_rename_batch_cycle_with_directories() {
        let dir = TempDir::new().unwrap();
        for name in ["one", "two", "three"] {
            fs::create_dir(dir.path().join(name)).unwrap();
            fs::write(dir.path().join(name).join("marker"), name).unwrap();
        }

        let report = run(
            dir.path(),
            &[("one", "two"), ("two", "three"), ("three", "one")],
        );

        assert_eq!(report.applied_count(), 3);
        assert_eq!(read(&dir.path().join("two"), "marker"), "one");
        assert_eq!(read(&dir.path().join("three"), "marker"), "two");
        assert_eq!(read(&dir.path().join("one"), "marker"), "three");
        assert!(
            listing(dir.path())
                .iter()
                .all(|name| !name.starts_with(DEFAULT_STAGING_PREFIX))
        );
    }

    #[test]
    fn test_rename_batch_missing_source_isolated() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a.txt", "b.txt"]);

        let report = run(
            dir.path(),
            &[("a.txt", "x.txt"), ("ghost.txt", "y.txt"), ("b.txt", "")],
        );

        let outcomes: Vec<&RenameOutcome> = report.records().iter().map(|r| &r.outcome).collect();
        assert_eq!(outcomes[0], &RenameOutcome::Applied);
        assert_eq!(
            outcomes[1],
            &RenameOutcome::Failed(RenameError::SourceNotFound)
        );
        assert_eq!(
            outcomes[2],
            &RenameOutcome::Skipped(SkipReason::NoNewName)
        );
        assert!(report.had_failures());
        assert_eq!(listing(dir.path()), vec!["b.txt", "x.txt"]);
    }

    #[test]
    fn test_rename_batch_rerun_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a.txt", "b.txt"]);
        let pairs = [("a.txt", "x.txt"), ("b.txt", " ")];

        let first = run(dir.path(), &pairs);
        assert_eq!(first.applied_count(), 1);
        let after_first = listing(dir.path());

        let second = run(dir.path(), &pairs);

        assert_eq!(second.applied_count(), 0);
        assert_eq!(
            second.records()[0].outcome,
            RenameOutcome::Failed(RenameError::SourceNotFound)
        );
        assert_eq!(
            second.records()[1].outcome,
            RenameOutcome::Skipped(SkipReason::NoNewName)
        );
        assert_eq!(listing(dir.path()), after_first);
    }

    #[test]
    fn test_rename_batch_report_keeps_request_order() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a", "b", "c"]);

        let report = run(dir.path(), &[("c", ""), ("b", "a"), ("a", "b"), ("", "z")]);

        let names: Vec<(&str, &str)> = report
            .records()
            .iter()
            .map(|r| (r.old_name.as_str(), r.new_name.as_str()))
            .collect();
        assert_eq!(names, vec![("c", ""), ("b", "a"), ("a", "b"), ("", "z")]);
        assert_eq!(report.applied_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.stranded().count(), 0);
    }

    #[test]
    fn test_rename_batch_empty_request() {
        let dir = TempDir::new().unwrap();

        let report = run(dir.path(), &[]);

        assert!(report.records().is_empty());
        assert!(!report.had_failures());
    }

    #[test]
    fn test_rename_batch_missing_directory() {
        let dir = TempDir::new().unwrap();
        let request: RenameRequest = [("a", "b")].into_iter().collect();

        let result = rename_batch(
            &request,
            &dir.path().join("missing"),
            &FsAccessor,
            &RenameOptions::default(),
        );

        assert!(matches!(
            result,
            Err(EngineError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_rename_batch_reports_stranded_entries() {
        use crate::memory::MemoryAccessor;

        let accessor = MemoryAccessor::with_entries(["a"]);
        accessor.fail_rename_to("b");
        let request: RenameRequest = [("a", "b")].into_iter().collect();

        let report = rename_batch(
            &request,
            &MemoryAccessor::base(),
            &accessor,
            &RenameOptions::default(),
        )
        .unwrap();

        let stranded: Vec<(&str, &str)> = report
            .stranded()
            .map(|(record, name)| (record.old_name.as_str(), name))
            .collect();
        assert_eq!(stranded, vec![("a", ".bulk-rename-0~a")]);
        assert!(report.had_failures());
    }

    #[test]
    fn test_rename_batch_skipped_entry_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a", "b"]);

        let report = run(dir.path(), &[("a", "b"), ("b", "")]);

        assert_eq!(
            report.records()[0].outcome,
            RenameOutcome::Failed(RenameError::TargetBlocked {
                target: "b".to_string()
            })
        );
        assert_eq!(
            report.records()[1].outcome,
            RenameOutcome::Skipped(SkipReason::NoNewName)
        );
        assert_eq!(read(dir.path(), "a"), "content of a");
        assert_eq!(read(dir.path(), "b"), "content of b");
        assert_eq!(listing(dir.path()), vec!["a", "b"]);
    }

    #[test]
    fn test_rename_batch_protected_entry_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &["a", "b", "c"]);
        let request: RenameRequest = [("a", "b"), ("b", "c")].into_iter().collect();
        let options = RenameOptions {
            protect_bystanders: true,
            ..RenameOptions::default()
        };

        let report = rename_batch(&request, dir.path(), &FsAccessor, &options).unwrap();

        assert_eq!(report.applied_count(), 0);
        assert_eq!(
            report.records()[1].outcome,
            RenameOutcome::Failed(RenameError::TargetExists)
        );
        assert_eq!(listing(dir.path()), vec!["a", "b", "c"]);
        assert_eq!(read(dir.path(), "b"), "content of b");
        assert_eq!(read(dir.path(), "c"), "content of c");
    }
}
