//! Interactive prompts using dialoguer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use dialoguer::Confirm;

/// Ask whether the planned renames should be performed.
///
/// # Errors
///
/// * If the prompt cannot be shown or the user cancels it
pub fn confirm_apply(count: usize) -> dialoguer::Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "Rename {count} entr{}?",
            if count == 1 { "y" } else { "ies" }
        ))
        .default(false)
        .interact()
}

/// Ask whether an existing mapping file may be replaced.
///
/// # Errors
///
/// * If the prompt cannot be shown or the user cancels it
pub fn confirm_overwrite(path: &Path) -> dialoguer::Result<bool> {
    Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
        .default(false)
        .interact()
}
