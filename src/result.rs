//! Per-child measurement results.
//!
//! Every measured child produces exactly one [`SizeResult`]. Errors that were
//! recovered while walking the child are carried alongside the total as
//! [`Diagnostic`]s, so workers never share a mutable error list.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where in a subtree a recovered error happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A single file or directory below the child could not be read.
    Entry,

    /// The child itself could not be read; its total is partial (usually 0).
    SubtreeRoot,
}

/// A recovered error encountered while measuring a child.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Path of the entry that failed
    pub path: PathBuf,

    /// Human-readable error message
    pub message: String,

    /// Whether the failure was on an inner entry or the child itself
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a diagnostic for an entry below the child.
    pub fn entry(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind: DiagnosticKind::Entry,
        }
    }

    /// Create a diagnostic for the child itself.
    pub fn subtree_root(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind: DiagnosticKind::SubtreeRoot,
        }
    }

    /// Render the diagnostic as a single output line.
    #[must_use]
    pub fn line(&self) -> String {
        match self.kind {
            DiagnosticKind::Entry => {
                format!("Error accessing {}: {}", self.path.display(), self.message)
            }
            DiagnosticKind::SubtreeRoot => {
                format!("Top-level error: {}: {}", self.path.display(), self.message)
            }
        }
    }
}

/// The total size of one child of the root.
#[derive(Clone, Debug)]
pub struct SizeResult {
    /// The child that was measured
    pub path: PathBuf,

    /// Sum of regular-file sizes under `path`, in bytes
    pub size: u64,

    /// Errors recovered while walking `path`
    pub diagnostics: Vec<Diagnostic>,
}

impl SizeResult {
    /// Create a result with no diagnostics.
    #[must_use]
    pub const fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            diagnostics: Vec::new(),
        }
    }

    /// The name shown for this child: the final path segment, or the whole
    /// path when there is none (e.g. `/` or `..`).
    #[must_use]
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    /// Whether any error was recovered while measuring this child.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_uses_final_segment() {
        let result = SizeResult::new(PathBuf::from("/home/alice"), 42);
        assert_eq!(result.name(), "alice");
    }

    #[test]
    fn test_name_falls_back_to_full_path() {
        let result = SizeResult::new(PathBuf::from("/"), 0);
        assert_eq!(result.name(), "/");
    }

    #[test]
    fn test_new_has_no_errors() {
        let result = SizeResult::new(PathBuf::from("/home/bob"), 0);
        assert!(!result.has_errors());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostic_lines() {
        let entry = Diagnostic::entry("/home/bob/secret", "Permission denied");
        assert_eq!(
            entry.line(),
            "Error accessing /home/bob/secret: Permission denied"
        );
        assert_eq!(entry.kind, DiagnosticKind::Entry);

        let root = Diagnostic::subtree_root("/home/gone", "No such file or directory");
        assert_eq!(
            root.line(),
            "Top-level error: /home/gone: No such file or directory"
        );
        assert_eq!(root.kind, DiagnosticKind::SubtreeRoot);
    }

    #[test]
    fn test_diagnostic_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DiagnosticKind::SubtreeRoot).unwrap();
        assert_eq!(json, "\"subtree_root\"");
    }
}
