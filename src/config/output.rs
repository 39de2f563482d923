//! Output configuration: result ordering and output format.

use clap::ValueEnum;

/// Enumeration of supported sorting criteria for result output.
///
/// Each variant has a natural default direction:
/// - `Size`: largest first (descending)
/// - `Name`: alphabetical, case-insensitive (ascending)
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SortCriteria {
    /// Sort by total size (largest first by default)
    Size,

    /// Sort by child name alphabetically (A-Z by default)
    Name,
}

/// Configuration for how results are printed.
///
/// When `sort` is `None`, results are printed in the order the root was
/// enumerated.
#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
    /// The sorting criterion to apply, or `None` to preserve scan order
    pub sort: Option<SortCriteria>,

    /// Whether to reverse the sort order
    pub reverse: bool,

    /// Emit a single JSON document instead of text lines
    pub json: bool,
}
