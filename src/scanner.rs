//! Concurrent measurement of every child of the root.
//!
//! This module holds the orchestration logic: it enumerates the root, then
//! measures each child on its own worker of a bounded rayon pool and waits
//! for all of them. Workers share nothing but the pool; each one hands its
//! single [`SizeResult`] back through the parallel iterator.

use std::path::Path;

use rayon::{ThreadPoolBuilder, prelude::*};

use crate::{
    config::ScanOptions, enumerator::list_children, error::ScanError, result::SizeResult,
    utils::calculate_dir_size,
};

/// Measures the children of a root directory.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// The options this scanner was built with.
    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.scan_options
    }

    /// Measure every child of the configured root.
    ///
    /// Each child listed by [`list_children`] is measured once with
    /// [`calculate_dir_size`] on a pool of `threads` workers (one per core
    /// when `threads` is 0). The call returns only after every child has been
    /// measured; there is no timeout or cancellation.
    ///
    /// Results come back in enumeration order, one per child. Errors inside a
    /// child never fail the scan; they are carried on that child's result.
    ///
    /// # Errors
    ///
    /// - [`ScanError::ReadRoot`] if the root cannot be listed
    /// - [`ScanError::ThreadPool`] if the worker pool cannot be created
    pub fn scan(&self) -> Result<Vec<SizeResult>, ScanError> {
        let children = list_children(&self.scan_options.root, &self.scan_options.ignore)?;

        if children.is_empty() {
            return Ok(Vec::new());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.scan_options.threads)
            .thread_name(|i| format!("dir-sizer-{i}"))
            .build()?;

        let results: Vec<SizeResult> = pool.install(|| {
            children
                .par_iter()
                .with_max_len(1)
                .map(|child| self.measure(child))
                .collect()
        });

        Ok(results)
    }

    /// Measure a single child with this scanner's exclusion set.
    #[must_use]
    pub fn measure(&self, path: &Path) -> SizeResult {
        calculate_dir_size(path, &self.scan_options.exclude)
    }
}
