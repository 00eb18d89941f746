//! Entry name filtering for bulk-rename.
//!
//! Compiles include and exclude glob patterns once and matches plain entry
//! names against them. Patterns are matched against the name only, never a
//! full path.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use globset::{Glob, GlobSet, GlobSetBuilder};
use thiserror::Error;

/// Errors that can occur while building a filter.
#[derive(Debug, Error)]
pub enum GlobError {
    /// A pattern could not be parsed.
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying globset error.
        #[source]
        source: globset::Error,
    },

    /// The compiled set could not be built.
    #[error("Failed to build glob set: {0}")]
    BuildError(#[source] globset::Error),
}

/// Include/exclude filter over entry names.
#[derive(Debug, Clone)]
pub struct NameFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
    include_hidden: bool,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
            include_hidden: false,
        }
    }
}

impl NameFilter {
    /// Build a filter from include and exclude patterns.
    ///
    /// An empty include list accepts every name.
    ///
    /// # Errors
    ///
    /// * If any pattern is invalid
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Result<Self, GlobError>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let include: Vec<String> = include.into_iter().map(|p| p.as_ref().to_string()).collect();
        let exclude: Vec<String> = exclude.into_iter().map(|p| p.as_ref().to_string()).collect();

        log::debug!("Building name filter: include={include:?} exclude={exclude:?}");

        Ok(Self {
            include: if include.is_empty() {
                None
            } else {
                Some(build_set(&include)?)
            },
            exclude: build_set(&exclude)?,
            include_hidden: false,
        })
    }

    /// Whether dot-entries are accepted (default: no).
    #[must_use]
    pub const fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Whether `name` passes the filter.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }

        if self.exclude.is_match(name) {
            return false;
        }

        self.include.as_ref().is_none_or(|set| set.is_match(name))
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet, GlobError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| GlobError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }

    builder.build().map_err(GlobError::BuildError)
}
