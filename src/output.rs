//! Text and JSON output.
//!
//! Text mode prints one line per measured child, `<name> <value> <unit>`,
//! preceded by any diagnostics recovered for that child. When the `--json`
//! flag is passed, the same information is serialized to stdout as a single
//! JSON object instead.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use serde::Serialize;

use crate::{result::SizeResult, utils::format_size};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The directory whose children were measured.
    pub root: String,

    /// One entry per measured child, in output order.
    pub entries: Vec<JsonEntry>,

    /// Sum of all entry sizes in bytes.
    pub total_size: u64,

    /// Human-readable formatted total size.
    pub total_size_formatted: String,
}

/// A single measured child in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonEntry {
    /// Final path segment of the child.
    pub name: String,

    /// Full path of the child.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"12.34 MB"`).
    pub size_formatted: String,

    /// Diagnostic lines for errors recovered while measuring this child.
    pub errors: Vec<String>,
}

impl JsonOutput {
    /// Build a `JsonOutput` from the scanned results.
    #[must_use]
    pub fn from_results(root: &Path, results: &[SizeResult]) -> Self {
        let total_size = results
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.size));

        Self {
            root: root.display().to_string(),
            entries: results.iter().map(JsonEntry::from_result).collect(),
            total_size,
            total_size_formatted: format_size(total_size),
        }
    }
}

impl JsonEntry {
    /// Convert a `SizeResult` into a `JsonEntry`.
    #[must_use]
    pub fn from_result(result: &SizeResult) -> Self {
        Self {
            name: result.name(),
            path: result.path.display().to_string(),
            size: result.size,
            size_formatted: format_size(result.size),
            errors: result.diagnostics.iter().map(|d| d.line()).collect(),
        }
    }
}

/// The uncolored output line for one child: `<name> <value> <unit>`.
#[must_use]
pub fn entry_line(result: &SizeResult) -> String {
    format!("{} {}", result.name(), format_size(result.size))
}

/// Write every result as text, each preceded by its diagnostics.
///
/// Diagnostic lines are colored red when `colored` decides the output should
/// be colorized; entry lines are written as [`entry_line`] produces them.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_results(out: &mut impl Write, results: &[SizeResult]) -> io::Result<()> {
    for result in results {
        for diagnostic in &result.diagnostics {
            writeln!(out, "{}", diagnostic.line().red())?;
        }
        writeln!(out, "{}", entry_line(result))?;
    }
    Ok(())
}

/// Print every result to stdout, each preceded by its diagnostics.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn print_results(results: &[SizeResult]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_results(&mut stdout, results)?;
    stdout.flush()
}
