//! bulk-rename CLI entry point.
//!
//! Exports a directory listing as a mapping template and renames the entries
//! of that directory once the template has been filled in.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod interactive;
mod output;
mod progress;

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use args::{ApplyArgs, Args, Command, ExportArgs, resolve_mapping_path};
use bulk_rename_config::{LOCAL_SETTINGS_FILE, Settings, discover_settings};
use bulk_rename_engine::{
    Candidate, DEFAULT_STAGING_PREFIX, FsAccessor, RenameOptions, RenameRequest,
    rename_batch_with_progress, validate,
};
use bulk_rename_glob::NameFilter;
use bulk_rename_mapping::{MappingFile, export_template, load_mapping, save_mapping};
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Main application logic.
///
/// Returns `Ok(false)` when the command ran but some entries failed.
fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;

    match args.command {
        Command::Export(export) => run_export(&export, &cwd),
        Command::Apply(apply) => run_apply(&apply, &cwd),
    }
}

fn run_export(args: &ExportArgs, cwd: &Path) -> Result<bool, Box<dyn std::error::Error>> {
    let dir = absolute(&args.dir, cwd);
    let loaded = discover_settings(&dir)?;
    let settings = &loaded.settings;

    output::print_header("Bulk Rename - Export");
    output::print_dir_info(&dir.to_string_lossy());
    output::print_settings_source(
        loaded
            .source
            .as_ref()
            .map(|p| p.to_string_lossy())
            .as_deref(),
    );
    println!();

    let output_path = resolve_mapping_path(
        args.output.as_deref(),
        &dir,
        &settings.mapping_file,
        cwd,
    );

    if output_path.exists() && !args.force && !interactive::confirm_overwrite(&output_path)? {
        println!("Nothing written. Use --force to replace the existing file.");
        return Ok(true);
    }

    let filter = name_filter(settings, args)?;
    let mut template = export_template(&dir, &FsAccessor, &filter)?;
    exclude_tool_files(&mut template, &dir, &output_path);

    save_mapping(&output_path, &template)?;

    output::print_success(&format!(
        "Wrote {} entr{} to {}",
        template.rows.len(),
        if template.rows.len() == 1 { "y" } else { "ies" },
        output_path.display()
    ));
    println!("Fill in newName for each entry to rename, then run `bulk-rename apply`.");

    Ok(true)
}

fn run_apply(args: &ApplyArgs, cwd: &Path) -> Result<bool, Box<dyn std::error::Error>> {
    let dir = absolute(&args.dir, cwd);
    let loaded = discover_settings(&dir)?;
    let settings = &loaded.settings;

    output::print_header("Bulk Rename");
    output::print_dir_info(&dir.to_string_lossy());
    output::print_settings_source(
        loaded
            .source
            .as_ref()
            .map(|p| p.to_string_lossy())
            .as_deref(),
    );

    let mapping_path = resolve_mapping_path(
        args.mapping.as_deref(),
        &dir,
        &settings.mapping_file,
        cwd,
    );
    println!("Mapping:   {}\n", mapping_path.display());

    let request = load_mapping(&mapping_path)?.into_request();

    if request.is_empty() {
        println!("The mapping file has no entries.");
        return Ok(true);
    }

    let options = rename_options(settings, args);
    let validation = validate(&request, &dir, &FsAccessor, &options)?;

    print_plan(&request, &validation.candidates, &validation.outcomes);

    if validation.candidates.is_empty() {
        println!("\nNothing to rename.");
        return Ok(!validation.has_failures());
    }

    if args.dry_run {
        println!("\nDry run: nothing was renamed.");
        return Ok(!validation.has_failures());
    }

    println!();
    if !args.yes && !interactive::confirm_apply(validation.candidates.len())? {
        println!("Aborted.");
        return Ok(true);
    }

    let progress_mgr = ProgressManager::new(args.should_show_progress());
    let bar = progress_mgr.create_rename_bar(validation.candidates.len() as u64);

    let report = rename_batch_with_progress(&request, &dir, &FsAccessor, &options, |done, _| {
        bar.set_position(done);
    })?;

    bar.finish_and_clear();

    for record in report.records() {
        output::print_record(record);
    }
    output::print_stranded(&report);
    output::print_summary(&report);

    if report.had_failures() {
        output::print_warning("Some entries could not be renamed.");
    } else {
        output::print_success("Rename complete!");
    }

    Ok(!report.had_failures())
}

/// Print what validation decided for every mapping row, in mapping order.
fn print_plan(
    request: &RenameRequest,
    candidates: &[Candidate],
    outcomes: &[Option<bulk_rename_engine::RenameOutcome>],
) {
    let mut candidates = candidates.iter().peekable();

    for (index, entry) in request.entries().iter().enumerate() {
        if let Some(outcome) = outcomes.get(index).and_then(Option::as_ref) {
            output::print_precheck(&entry.old_name, outcome);
        } else if let Some(candidate) = candidates.next_if(|c| c.index == index) {
            output::print_planned(&candidate.old_name, &candidate.new_name);
        }
    }
}

/// Merge settings with command line flags.
fn rename_options(settings: &Settings, args: &ApplyArgs) -> RenameOptions {
    RenameOptions {
        staging_prefix: settings
            .staging_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_STAGING_PREFIX.to_string()),
        reject_duplicate_targets: settings.reject_duplicate_targets || args.strict_targets,
        protect_bystanders: settings.protect_bystanders || args.protect_existing,
    }
}

/// Build the export filter from settings and command line flags.
fn name_filter(
    settings: &Settings,
    args: &ExportArgs,
) -> Result<NameFilter, bulk_rename_glob::GlobError> {
    let exclude = settings.exclude.iter().chain(args.exclude.iter());

    Ok(NameFilter::new(&args.include, exclude)?.with_hidden(settings.include_hidden || args.hidden))
}

/// Drop the mapping file and the local settings file from a template of `dir`.
fn exclude_tool_files(template: &mut MappingFile, dir: &Path, output_path: &Path) {
    let mapping_name = (output_path.parent() == Some(dir))
        .then(|| output_path.file_name().and_then(|n| n.to_str()))
        .flatten();

    template.rows.retain(|row| {
        row.old_name != LOCAL_SETTINGS_FILE && Some(row.old_name.as_str()) != mapping_name
    });
}

fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
