//! Listing the children of the root directory.
//!
//! The enumerator produces the unit of concurrent work: every immediate child
//! of the root, files included, except those named in the top-level ignore
//! list. Order is whatever the filesystem yields.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::error::ScanError;

/// List the immediate children of `root`, leaving out any child whose file
/// name exactly matches an entry of `ignore`.
///
/// # Errors
///
/// Returns [`ScanError::ReadRoot`] if `root` cannot be opened or one of its
/// entries cannot be read while listing. No partial list is returned.
pub fn list_children(root: &Path, ignore: &[OsString]) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(root).map_err(|e| ScanError::read_root(root, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::read_root(root, e))?;
        let name = entry.file_name();

        if ignore.contains(&name) {
            continue;
        }

        children.push(entry.path());
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(children: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = children
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_lists_files_and_directories() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("alice")).unwrap();
        fs::create_dir(root.path().join("bob")).unwrap();
        fs::write(root.path().join("notes.txt"), "hi").unwrap();

        let children = list_children(root.path(), &[]).unwrap();

        assert_eq!(names(&children), vec!["alice", "bob", "notes.txt"]);
        assert!(children.iter().all(|c| c.parent() == Some(root.path())));
    }

    #[test]
    fn test_ignored_names_are_left_out() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("alice")).unwrap();
        fs::create_dir(root.path().join("docker")).unwrap();

        let children = list_children(root.path(), &[OsString::from("docker")]).unwrap();

        assert_eq!(names(&children), vec!["alice"]);
    }

    #[test]
    fn test_ignore_is_case_sensitive() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Docker")).unwrap();

        let children = list_children(root.path(), &[OsString::from("docker")]).unwrap();

        assert_eq!(names(&children), vec!["Docker"]);
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let root = TempDir::new().unwrap();

        let children = list_children(root.path(), &[]).unwrap();

        assert!(children.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");

        let err = list_children(&missing, &[]).unwrap_err();

        assert!(matches!(err, ScanError::ReadRoot { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_file_as_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        assert!(list_children(&file, &[]).is_err());
    }
}
