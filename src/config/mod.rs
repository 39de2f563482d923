//! Configuration types for scanning and output.
//!
//! Options are resolved in layers: **CLI argument > config file > default**.
//! The binary's `cli` module performs the layering; this module only defines
//! the resolved option structs and the on-disk [`FileConfig`].

pub mod file;
pub mod output;
pub mod scan;

pub use file::FileConfig;
pub use output::{OutputOptions, SortCriteria};
pub use scan::{DEFAULT_EXCLUDE, DEFAULT_IGNORE, DEFAULT_ROOT, ExclusionSet, ScanOptions};
