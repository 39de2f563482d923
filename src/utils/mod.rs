//! Utility functions and helpers.
//!
//! This module contains the subtree size accumulator and the byte-count
//! formatter used throughout the application.

pub mod size;

pub use size::{calculate_dir_size, format_size};
