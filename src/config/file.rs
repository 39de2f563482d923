//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/dir-sizer/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! root = "~/"
//!
//! [scanning]
//! threads = 4
//! verbose = false
//! ignore = ["docker", "lost+found"]
//! exclude = ["researchdev", "node_modules"]
//!
//! [output]
//! sort = "size"
//! reverse = false
//! json = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Directory whose children are measured
    pub root: Option<PathBuf>,

    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileScanConfig {
    /// Number of worker threads
    pub threads: Option<usize>,

    /// Whether to print the resolved settings
    pub verbose: Option<bool>,

    /// Children of the root that are not measured
    pub ignore: Option<Vec<String>>,

    /// Directory names pruned inside every child
    pub exclude: Option<Vec<String>>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileOutputConfig {
    /// Sort criterion (`"size"` or `"name"`)
    pub sort: Option<String>,

    /// Whether to reverse the sort order
    pub reverse: Option<bool>,

    /// Whether to print JSON instead of text
    pub json: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/dir-sizer/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dir-sizer").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// contains invalid TOML.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.root.is_none());
        assert!(config.scanning.threads.is_none());
        assert!(config.scanning.verbose.is_none());
        assert!(config.scanning.ignore.is_none());
        assert!(config.scanning.exclude.is_none());
        assert!(config.output.sort.is_none());
        assert!(config.output.reverse.is_none());
        assert!(config.output.json.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
root = "/srv/users"

[scanning]
threads = 4
verbose = true
ignore = ["docker", "lost+found"]
exclude = ["researchdev", "node_modules"]

[output]
sort = "size"
reverse = true
json = false
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.root, Some(PathBuf::from("/srv/users")));
        assert_eq!(config.scanning.threads, Some(4));
        assert_eq!(config.scanning.verbose, Some(true));
        assert_eq!(
            config.scanning.ignore,
            Some(vec!["docker".to_string(), "lost+found".to_string()])
        );
        assert_eq!(
            config.scanning.exclude,
            Some(vec!["researchdev".to_string(), "node_modules".to_string()])
        );
        assert_eq!(config.output.sort, Some("size".to_string()));
        assert_eq!(config.output.reverse, Some(true));
        assert_eq!(config.output.json, Some(false));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r"
[scanning]
threads = 2
";

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.root.is_none());
        assert_eq!(config.scanning.threads, Some(2));
        assert!(config.scanning.exclude.is_none());
        assert!(config.output.sort.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.root.is_none());
        assert!(config.scanning.ignore.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[scanning]
threads = "many"
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "root = \"/data\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/data")));
    }

    #[test]
    fn test_load_from_reports_path_on_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "root = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FileConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new("dir-sizer").join("config.toml")));
        }
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/users"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("users"));
        }
    }

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(&PathBuf::from("~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home);
        }
    }

    #[test]
    fn test_expand_tilde_no_effect_on_non_tilde() {
        let relative = PathBuf::from("some/relative/path");
        assert_eq!(expand_tilde(&relative), relative);

        let absolute = PathBuf::from("/usr/local/bin");
        assert_eq!(expand_tilde(&absolute), absolute);
    }
}
