//! Error types for scanning operations.
//!
//! Only failures that stop the whole run live here. Errors confined to a
//! single entry or a single child are recovered and recorded as
//! [`Diagnostic`](crate::result::Diagnostic)s on the affected result.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory could not be listed.
    #[error("Failed to read root directory {}: {source}", .path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// Create a root-listing error with path context.
    pub fn read_root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadRoot {
            path: path.into(),
            source,
        }
    }
}
