//! Syncthing folder detection
//!
//! Finds the folder root enclosing a directory, so the tool works from
//! anywhere inside a synced folder.

use std::path::{Path, PathBuf};

use stignore_fs::{IgnorePath, NormalizedPath, io};

use crate::error::{Error, Result};

/// The folder root enclosing a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLocation {
    root: PathBuf,
    offset: NormalizedPath,
}

impl RootLocation {
    /// Absolute path of the folder root (the directory holding `.stfolder`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Anchored path from the root down to the working directory.
    ///
    /// `/` when the working directory is the root itself.
    pub fn offset(&self) -> &NormalizedPath {
        &self.offset
    }

    /// Path of one of the well-known files inside the root.
    pub fn file(&self, name: IgnorePath) -> PathBuf {
        self.root.join(name)
    }
}

/// Find the Syncthing folder enclosing `cwd`.
///
/// `cwd` is canonicalized first, then it and each of its ancestors are
/// checked for a `.stfolder` directory. The nearest match wins. Reaching the
/// filesystem root without a match is [`Error::RootNotFound`].
pub fn locate_root(cwd: &Path) -> Result<RootLocation> {
    let start = io::canonicalize(cwd)?;

    let root = start
        .ancestors()
        .find(|dir| dir.join(IgnorePath::StFolder).is_dir())
        .ok_or_else(|| Error::RootNotFound {
            start: start.clone(),
        })?;

    let offset = start
        .strip_prefix(root)
        .map(NormalizedPath::anchored)
        .unwrap_or_else(|_| NormalizedPath::root());

    tracing::debug!(root = %root.display(), offset = %offset, "Located syncthing folder");

    Ok(RootLocation {
        root: root.to_path_buf(),
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn canonical(temp: &TempDir) -> PathBuf {
        io::canonicalize(temp.path()).unwrap()
    }

    #[test]
    fn test_locate_at_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".stfolder")).unwrap();

        let location = locate_root(temp.path()).unwrap();

        assert_eq!(location.root(), canonical(&temp));
        assert!(location.offset().is_root());
    }

    #[test]
    fn test_locate_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".stfolder")).unwrap();
        let nested = temp.path().join("some").join("path");
        fs::create_dir_all(&nested).unwrap();

        let location = locate_root(&nested).unwrap();

        assert_eq!(location.root(), canonical(&temp));
        assert_eq!(location.offset().as_str(), "/some/path");
    }

    #[test]
    fn test_nearest_marker_wins() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".stfolder")).unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir_all(inner.join(".stfolder")).unwrap();
        let nested = inner.join("deep");
        fs::create_dir_all(&nested).unwrap();

        let location = locate_root(&nested).unwrap();

        assert_eq!(location.root(), canonical(&temp).join("inner"));
        assert_eq!(location.offset().as_str(), "/deep");
    }

    #[test]
    fn test_marker_file_is_not_a_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".stfolder"), "").unwrap();

        let result = locate_root(temp.path());

        assert!(matches!(result, Err(Error::RootNotFound { .. })));
    }

    #[test]
    fn test_missing_directory_is_fs_error() {
        let temp = TempDir::new().unwrap();
        let result = locate_root(&temp.path().join("missing"));
        assert!(matches!(result, Err(Error::Fs(_))));
    }

    #[test]
    fn test_file_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".stfolder")).unwrap();

        let location = locate_root(temp.path()).unwrap();

        assert_eq!(
            location.file(IgnorePath::Stignore),
            canonical(&temp).join(".stignore")
        );
    }
}
