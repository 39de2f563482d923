//! Scanning configuration for directory measurement.
//!
//! This module defines which root is measured, which of its children are
//! left out, which directory names are pruned inside each child, and how
//! many worker threads do the measuring.

use std::{
    collections::BTreeSet,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

/// Root directory measured when none is configured.
pub const DEFAULT_ROOT: &str = "/home";

/// Children of the root that are never measured by default.
pub const DEFAULT_IGNORE: &[&str] = &["docker"];

/// Directory names pruned inside every child by default.
pub const DEFAULT_EXCLUDE: &[&str] = &["researchdev"];

/// A set of directory names that are skipped wherever they appear below a
/// measured child.
///
/// Matching is an exact, case-sensitive comparison against the entry's file
/// name. Only directories are pruned; a regular file that happens to carry an
/// excluded name is still counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<OsString>,
}

impl ExclusionSet {
    /// Build a set from any list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that prunes nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Whether `name` is excluded.
    #[must_use]
    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Whether the set excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the excluded names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.names.iter().map(OsString::as_os_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE.iter().copied())
    }
}

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Directory whose immediate children are measured
    pub root: PathBuf,

    /// Whether to print the resolved settings before scanning
    pub verbose: bool,

    /// Number of worker threads (0 = one per CPU core)
    pub threads: usize,

    /// Children of the root that are not measured at all
    pub ignore: Vec<OsString>,

    /// Directory names pruned inside every child
    pub exclude: ExclusionSet,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            verbose: false,
            threads: 0,
            ignore: DEFAULT_IGNORE.iter().map(OsString::from).collect(),
            exclude: ExclusionSet::default(),
        }
    }
}
