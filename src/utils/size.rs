//! Directory size measurement and formatting.
//!
//! This module walks a single child of the root and sums the sizes of the
//! regular files beneath it, and formats byte counts for display.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::{
    config::ExclusionSet,
    result::{Diagnostic, SizeResult},
};

/// Unit suffixes indexed by the number of divisions by 1024.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Calculate the total size of all regular files under `path`, in bytes.
///
/// Traverses the subtree depth-first with `walkdir`. A symlink handed in as
/// `path` is resolved and its target measured; symlinks found below it are
/// never followed. Any directory strictly below `path` whose name is in
/// `exclude` is pruned: it is neither descended into nor counted.
///
/// - A regular file handed in directly counts as a one-entry subtree and
///   yields its own size. Sockets and devices yield 0, and so does any
///   symlink below `path`.
/// - An error on an inner entry (permission denied, entry vanished, ...) is
///   recorded as an entry diagnostic and contributes 0; the walk continues.
/// - An error on `path` itself is recorded as a subtree-root diagnostic and
///   the partial total (usually 0) is returned.
///
/// Always returns exactly one [`SizeResult`] for `path`.
#[must_use]
pub fn calculate_dir_size(path: &Path, exclude: &ExclusionSet) -> SizeResult {
    let mut result = SizeResult::new(path.to_path_buf(), 0);

    let walker = WalkDir::new(path)
        .follow_links(false)
        .follow_root_links(true)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let failed = err.path().unwrap_or(path).to_path_buf();
                let message = err
                    .io_error()
                    .map_or_else(|| err.to_string(), ToString::to_string);

                let diagnostic = if err.depth() == 0 {
                    Diagnostic::subtree_root(failed, message)
                } else {
                    Diagnostic::entry(failed, message)
                };
                result.diagnostics.push(diagnostic);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => result.size = result.size.saturating_add(metadata.len()),
            Err(err) => {
                let message = err
                    .io_error()
                    .map_or_else(|| err.to_string(), ToString::to_string);
                result
                    .diagnostics
                    .push(Diagnostic::entry(entry.path(), message));
            }
        }
    }

    result
}

/// Whether `entry` is a directory below the walk root whose name is excluded.
///
/// The walk root itself is never pruned here; keeping top-level children out
/// is the enumerator's job.
fn is_excluded(entry: &DirEntry, exclude: &ExclusionSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && exclude.contains(entry.file_name())
}

/// Format a byte count for display using binary (1024) steps.
///
/// The value is divided by 1024 while it is at least 1024, at most four
/// times, and printed with two decimals followed by `B`, `KB`, `MB`, `GB` or
/// `TB`. There is no unit past `TB`, so very large values keep growing in
/// front of it (`1024^5` bytes prints as `1024.00 TB`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}
