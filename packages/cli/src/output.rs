//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;

use bulk_rename_engine::{RenameOutcome, RenameRecord, RenameReport};
use colored::Colorize;

/// Print a header message.
pub fn print_header(message: &str) {
    println!("\n{} {}\n", "📂", message.bold());
}

/// Print the directory being worked on.
pub fn print_dir_info(dir: &str) {
    println!("Directory: {}", dir.cyan());
}

/// Print where settings were loaded from.
pub fn print_settings_source(source: Option<&str>) {
    match source {
        Some(path) => println!("Settings:  {}", path.cyan()),
        None => println!("Settings:  {}", "defaults".dimmed()),
    }
}

/// Print a rename that will be attempted.
pub fn print_planned(old_name: &str, new_name: &str) {
    println!("  {} {} {} {}", "→".cyan(), old_name, "→".dimmed(), new_name.green());
}

/// Print an entry decided before anything is renamed.
pub fn print_precheck(old_name: &str, outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::Failed(e) => {
            println!("  {} {:<30} {}", "✗".red(), old_name, e.to_string().red());
        }
        other => {
            println!("  {} {:<30} {}", "•".dimmed(), old_name, other.to_string().dimmed());
        }
    }
}

/// Print the result of one entry.
pub fn print_record(record: &RenameRecord) {
    match &record.outcome {
        RenameOutcome::Applied => println!(
            "{} {:<30} {}",
            "✓".green(),
            record.old_name,
            record.new_name.dimmed()
        ),
        RenameOutcome::Skipped(reason) => println!(
            "{} {:<30} {}",
            "•".dimmed(),
            record.old_name,
            reason.to_string().dimmed()
        ),
        RenameOutcome::Failed(e) => println!(
            "{} {:<30} {}",
            "✗".red(),
            record.old_name,
            e.to_string().red()
        ),
    }
    let _ = std::io::stdout().flush();
}

/// Print entries whose final rename failed, with the name they are stuck at.
pub fn print_stranded(report: &RenameReport) {
    let stranded: Vec<_> = report.stranded().collect();
    if stranded.is_empty() {
        return;
    }

    println!(
        "\n{} {} entr{} left under a temporary name:",
        "Warning:".yellow().bold(),
        stranded.len(),
        if stranded.len() == 1 { "y" } else { "ies" }
    );
    for (record, staged_name) in stranded {
        println!(
            "  {} {} (wanted {}, was {})",
            "•".dimmed(),
            staged_name.yellow(),
            record.new_name,
            record.old_name
        );
    }
}

/// Print the batch totals.
pub fn print_summary(report: &RenameReport) {
    println!(
        "\n{} applied, {} skipped, {} failed",
        report.applied_count().to_string().green(),
        report.skipped_count().to_string().dimmed(),
        if report.failed_count() == 0 {
            report.failed_count().to_string().normal()
        } else {
            report.failed_count().to_string().red()
        }
    );
}

/// Print success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✅", message);
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}
