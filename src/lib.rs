//! # dir-sizer
//!
//! Library side of the `dir-sizer` command-line tool. It measures the disk
//! usage of each immediate child of a root directory, one worker per child,
//! and reports a human-readable size for every child.
//!
//! ## Main Parts
//!
//! - [`enumerator`] - Lists the children of the root, minus top-level exclusions
//! - [`utils::size`] - Walks one subtree and sums regular-file sizes
//! - [`scanner`] - Fans the measurements out over a bounded thread pool
//! - [`result`] - The per-child [`SizeResult`] and its recovered diagnostics
//! - [`config`] - Scan and output options, plus the TOML config file
//! - [`filtering`] - Optional reordering of results
//! - [`output`] - Text and JSON rendering

pub mod config;
pub mod enumerator;
pub mod error;
pub mod filtering;
pub mod output;
pub mod result;
pub mod scanner;
pub mod utils;

pub use config::{ExclusionSet, OutputOptions, ScanOptions, SortCriteria};
pub use error::ScanError;
pub use result::{Diagnostic, DiagnosticKind, SizeResult};
pub use scanner::Scanner;
