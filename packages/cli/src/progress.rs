//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar manager for rename batches.
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar for a rename batch.
    ///
    /// Every entry counts twice, once when staged and once when committed.
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_rename_bar(&self, entries: u64) -> ProgressBar {
        if !self.enabled || entries == 0 {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(entries * 2);
        match ProgressStyle::default_bar()
            .template("  Renaming [{bar:30.green/dim}] {pos}/{len} steps")
        {
            Ok(style) => pb.set_style(style.progress_chars("━━─")),
            Err(e) => log::warn!("Invalid progress bar template: {e}"),
        }
        pb
    }
}
