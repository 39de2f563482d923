//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their defaults
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use dir_sizer::config::file::{FileConfig, expand_tilde};
use dir_sizer::config::{
    DEFAULT_EXCLUDE, DEFAULT_IGNORE, DEFAULT_ROOT, ExclusionSet, OutputOptions, ScanOptions,
    SortCriteria,
};

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of worker threads used to measure children
    ///
    /// A value of 0 uses one thread per CPU core. Each child of the root is
    /// measured by exactly one worker.
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Print the resolved scan settings before measuring
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Children of the root that are not measured at all
    ///
    /// Matches the child's file name exactly. Can be specified multiple times.
    /// Defaults to `docker`.
    #[arg(long, action = clap::ArgAction::Append)]
    ignore: Vec<OsString>,

    /// Directory names skipped wherever they appear inside a child
    ///
    /// A matching directory is neither descended into nor counted. Can be
    /// specified multiple times. Defaults to `researchdev`.
    #[arg(long, action = clap::ArgAction::Append)]
    exclude: Vec<OsString>,
}

/// Command-line arguments for controlling result output.
#[derive(Parser)]
struct OutputArgs {
    /// Sort results before printing
    ///
    /// Supported values: size (largest first), name (alphabetical).
    /// Without this option results are printed in the order the root was listed.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "dir-sizer")]
#[command(about = "Measure the disk usage of every top-level subdirectory of a root directory")]
#[command(version)]
pub(crate) struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub(crate) subcommand: Option<Commands>,

    /// Directory whose immediate children are measured
    ///
    /// Defaults to the config file's `root`, then to `/home`.
    root: Option<PathBuf>,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

impl Cli {
    /// Resolve the root directory from CLI args, config file, or default.
    ///
    /// Priority: CLI argument > config file `root` > `/home`.
    /// Tilde expansion is applied to the config file value.
    #[must_use]
    pub(crate) fn root(&self, config: &FileConfig) -> PathBuf {
        if let Some(root) = &self.root {
            return root.clone();
        }

        config
            .root
            .as_deref()
            .map_or_else(|| PathBuf::from(DEFAULT_ROOT), expand_tilde)
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (one per core)
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **ignore** / **exclude**: CLI list (if any) > config list > built-in default
    #[must_use]
    pub(crate) fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let ignore = resolve_names(
            &self.scanning.ignore,
            config.scanning.ignore.as_deref(),
            DEFAULT_IGNORE,
        );
        let exclude = resolve_names(
            &self.scanning.exclude,
            config.scanning.exclude.as_deref(),
            DEFAULT_EXCLUDE,
        );

        ScanOptions {
            root: self.root(config),
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
            ignore,
            exclude: ExclusionSet::new(exclude),
        }
    }

    /// Extract output options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (no sorting, text output).
    #[must_use]
    pub(crate) fn output_options(&self, config: &FileConfig) -> OutputOptions {
        OutputOptions {
            sort: self.output.sort.or_else(|| {
                config
                    .output
                    .sort
                    .as_ref()
                    .and_then(|s| SortCriteria::from_str(s, true).ok())
            }),
            reverse: self.output.reverse || config.output.reverse.unwrap_or(false),
            json: self.output.json || config.output.json.unwrap_or(false),
        }
    }
}

/// Pick the CLI names if any were given, else the config names, else the defaults.
fn resolve_names(cli: &[OsString], config: Option<&[String]>, default: &[&str]) -> Vec<OsString> {
    if !cli.is_empty() {
        return cli.to_vec();
    }

    config.map_or_else(
        || default.iter().map(OsString::from).collect(),
        |names| names.iter().map(OsString::from).collect(),
    )
}
