//! [`TestFolder`] builder for stignore test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Syncthing folder with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use stignore_test_utils::TestFolder;
///
/// let folder = TestFolder::new();
/// folder.write(".stignore_sync", "");
/// let cwd = folder.subdir("some/path");
/// folder.assert_file_content(".stignore_sync", "");
/// # let _ = cwd;
/// ```
pub struct TestFolder {
    // Held so the directory lives as long as the fixture
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFolder {
    /// Create a temporary directory marked as a folder root with `.stfolder`.
    pub fn new() -> Self {
        let folder = Self::unmarked();
        fs::create_dir(folder.root.join(".stfolder")).unwrap();
        folder
    }

    /// Create a temporary directory without the `.stfolder` marker.
    pub fn unmarked() -> Self {
        let temp_dir = TempDir::new().unwrap();
        // Canonical form, so it compares equal to what the locator reports
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Return the root path of the folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create (if needed) and return a directory below the root.
    pub fn subdir(&self, path: &str) -> PathBuf {
        let dir = self.root.join(path);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `content` to `path` (relative to the root).
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) holds exactly `expected`.
    ///
    /// # Panics
    /// Panics if the file is missing or its content differs.
    pub fn assert_file_content(&self, path: &str, expected: &str) {
        let full_path = self.root.join(path);
        let actual = fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", full_path.display(), e));
        assert_eq!(
            actual,
            expected,
            "Unexpected content in {}",
            full_path.display()
        );
    }
}
