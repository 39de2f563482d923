//! # dir-sizer
//!
//! A fast CLI tool that reports the disk usage of every immediate child of a
//! root directory (by default `/home`).
//!
//! Each child is measured on its own worker of a bounded thread pool. Inside
//! a child, directories named in the exclusion set are skipped entirely, and
//! unreadable entries are reported and counted as zero instead of aborting
//! the run.
//!
//! ## Usage
//!
//! ```bash
//! # Measure every user directory under /home
//! dir-sizer
//!
//! # Measure another root, skip node_modules everywhere, largest first
//! dir-sizer /srv --exclude node_modules --sort size
//!
//! # Machine-readable output
//! dir-sizer --json
//! ```

mod cli;

use anyhow::{Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dir_sizer::{
    ScanOptions, Scanner,
    config::FileConfig,
    filtering::sort_results,
    output::{JsonOutput, print_results},
};
use std::process::exit;

/// Entry point for the dir-sizer application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, resolves the layered configuration, measures every
/// child of the root, and prints the results.
///
/// # Errors
///
/// Returns errors from listing the root directory, building the worker pool,
/// config subcommands, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();
    let scan_options = args.scan_options(&file_config);
    let output_options = args.output_options(&file_config);

    if scan_options.verbose && !output_options.json {
        print_settings(&scan_options);
    }

    let scanner = Scanner::new(scan_options);
    let mut results = scanner.scan()?;
    sort_results(&mut results, &output_options);

    if output_options.json {
        let output = JsonOutput::from_results(&scanner.options().root, &results);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_results(&results)?;
    }

    Ok(())
}

/// Print the resolved scan settings.
fn print_settings(opts: &ScanOptions) {
    let join = |names: Vec<String>| {
        if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        }
    };

    let ignore = join(
        opts.ignore
            .iter()
            .map(|n| n.to_string_lossy().into_owned())
            .collect(),
    );
    let exclude = join(
        opts.exclude
            .iter()
            .map(|n| n.to_string_lossy().into_owned())
            .collect(),
    );
    let threads = if opts.threads == 0 {
        "one per core".to_string()
    } else {
        opts.threads.to_string()
    };

    println!("{} {}", "Root:".bold(), opts.root.display());
    println!("{} {ignore}", "Ignored children:".bold());
    println!("{} {exclude}", "Excluded directories:".bold());
    println!("{} {threads}", "Workers:".bold());
    println!();
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dir-sizer configuration
# All values shown are their defaults. Uncomment and change as needed.

# Directory whose immediate children are measured
# root = "/home"

[scanning]
# Number of worker threads (0 = one per CPU core)
# threads = 0

# Print the resolved settings before measuring
# verbose = false

# Children of the root that are not measured at all
# ignore = ["docker"]

# Directory names skipped wherever they appear inside a child
# exclude = ["researchdev"]

[output]
# Sort results by: size, name (unset = listing order)
# sort = "size"

# Reverse the sort order
# reverse = false

# Print a single JSON document instead of text
# json = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_names(val: Option<&[String]>, default: &[&str]) -> String {
        let quote = |items: Vec<String>| format!("[{}]", items.join(", "));
        val.map_or_else(
            || {
                format!(
                    "{}  (default)",
                    quote(default.iter().map(|n| format!("\"{n}\"")).collect())
                )
            },
            |v| quote(v.iter().map(|n| format!("\"{n}\"")).collect()),
        )
    }

    let root = config.root.as_ref().map_or_else(
        || format!("\"{}\"  (default)", dir_sizer::config::DEFAULT_ROOT),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
root     = {root}

[scanning]
threads  = {threads}
verbose  = {verbose}
ignore   = {ignore}
exclude  = {exclude}

[output]
sort     = {sort}
reverse  = {reverse}
json     = {json}",
        threads = config
            .scanning
            .threads
            .map_or_else(|| "0 (all cores)  (default)".to_string(), |v| v.to_string()),
        verbose = show_bool(config.scanning.verbose, false),
        ignore = show_names(
            config.scanning.ignore.as_deref(),
            dir_sizer::config::DEFAULT_IGNORE
        ),
        exclude = show_names(
            config.scanning.exclude.as_deref(),
            dir_sizer::config::DEFAULT_EXCLUDE
        ),
        sort = config
            .output
            .sort
            .as_deref()
            .map_or_else(|| "(none)  (default)".to_string(), |v| format!("\"{v}\"")),
        reverse = show_bool(config.output.reverse, false),
        json = show_bool(config.output.json, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_template_parses_to_defaults() {
        let config: FileConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();

        assert!(config.root.is_none());
        assert!(config.scanning.threads.is_none());
        assert!(config.output.sort.is_none());
    }

    #[test]
    fn test_format_config_defaults() {
        let text = format_config(&FileConfig::default());

        assert!(text.contains("root     = \"/home\"  (default)"));
        assert!(text.contains("ignore   = [\"docker\"]  (default)"));
        assert!(text.contains("exclude  = [\"researchdev\"]  (default)"));
        assert!(text.contains("sort     = (none)  (default)"));
    }

    #[test]
    fn test_format_config_with_values() {
        let config: FileConfig = toml::from_str(
            r#"
root = "/srv"
[scanning]
exclude = ["cache", "build"]
[output]
sort = "name"
json = true
"#,
        )
        .unwrap();

        let text = format_config(&config);

        assert!(text.contains("root     = \"/srv\""));
        assert!(text.contains("exclude  = [\"cache\", \"build\"]"));
        assert!(text.contains("sort     = \"name\""));
        assert!(text.contains("json     = true"));
    }
}
