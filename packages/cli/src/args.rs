//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// CLI arguments for bulk-rename.
#[derive(Debug, Parser)]
#[command(
    name = "bulk-rename",
    about = "Rename the entries of a directory from an oldName/newName mapping table",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a mapping template listing the entries of a directory.
    Export(ExportArgs),

    /// Rename the entries of a directory according to a mapping file.
    Apply(ApplyArgs),
}

/// Arguments for `bulk-rename export`.
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Directory whose entries are listed.
    #[arg(index = 1)]
    pub dir: PathBuf,

    /// Where to write the template (defaults to the configured mapping file inside DIR).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Only list names matching this glob (can be specified multiple times).
    #[arg(long = "include")]
    pub include: Vec<String>,

    /// Never list names matching this glob (can be specified multiple times).
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// List dot-entries too.
    #[arg(long)]
    pub hidden: bool,

    /// Overwrite an existing mapping file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `bulk-rename apply`.
#[derive(Debug, clap::Args)]
pub struct ApplyArgs {
    /// Directory whose entries are renamed.
    #[arg(index = 1)]
    pub dir: PathBuf,

    /// Mapping file to read (defaults to the configured mapping file inside DIR).
    #[arg(long, short = 'm')]
    pub mapping: Option<PathBuf>,

    /// Show the plan without renaming anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Fail every entry but the first that targets the same new name.
    #[arg(long = "strict-targets")]
    pub strict_targets: bool,

    /// Refuse to rename onto an existing entry that is not itself renamed away.
    #[arg(long = "protect-existing")]
    pub protect_existing: bool,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl ApplyArgs {
    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

/// Resolve the mapping file location.
///
/// An explicit path is taken relative to `cwd`; otherwise `default_name` is
/// looked up inside `dir`.
#[must_use]
pub fn resolve_mapping_path(
    explicit: Option<&Path>,
    dir: &Path,
    default_name: &str,
    cwd: &Path,
) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => dir.join(default_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apply() {
        let args = Args::try_parse_from([
            "bulk-rename",
            "apply",
            "photos",
            "-m",
            "map.json",
            "--yes",
            "--strict-targets",
            "--no-progress",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        let Command::Apply(apply) = args.command else {
            panic!("expected apply");
        };
        assert_eq!(apply.dir, PathBuf::from("photos"));
        assert_eq!(apply.mapping, Some(PathBuf::from("map.json")));
        assert!(apply.yes);
        assert!(apply.strict_targets);
        assert!(!apply.protect_existing);
        assert!(!apply.dry_run);
        assert!(!apply.should_show_progress());
    }

    #[test]
    fn test_parse_export() {
        let args = Args::try_parse_from([
            "bulk-rename",
            "export",
            "photos",
            "--include",
            "*.jpg",
            "--include",
            "*.png",
            "--exclude",
            "tmp*",
            "--hidden",
        ])
        .unwrap();

        assert!(!args.verbose);
        let Command::Export(export) = args.command else {
            panic!("expected export");
        };
        assert_eq!(export.include, vec!["*.jpg", "*.png"]);
        assert_eq!(export.exclude, vec!["tmp*"]);
        assert!(export.hidden);
        assert!(!export.force);
        assert_eq!(export.output, None);
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Args::try_parse_from(["bulk-rename", "apply"]).is_err());
    }

    #[test]
    fn test_resolve_mapping_path() {
        let dir = Path::new("/data/photos");
        let cwd = Path::new("/home/user");

        assert_eq!(
            resolve_mapping_path(None, dir, "rename.toml", cwd),
            PathBuf::from("/data/photos/rename.toml")
        );
        assert_eq!(
            resolve_mapping_path(Some(Path::new("map.json")), dir, "rename.toml", cwd),
            PathBuf::from("/home/user/map.json")
        );
        assert_eq!(
            resolve_mapping_path(Some(Path::new("/tmp/map.toml")), dir, "rename.toml", cwd),
            PathBuf::from("/tmp/map.toml")
        );
    }
}
