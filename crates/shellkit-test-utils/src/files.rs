//! [`TestDir`] for scenarios over files with known content.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for writing, reading and asserting
/// on files.
///
/// # Example
///
/// ```rust,no_run
/// use shellkit_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// let rc = dir.write("bashrc", "export A=1\n");
/// dir.assert_content("bashrc", "export A=1\n");
/// dir.assert_no_scratch_files();
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestDir::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Read `name` as a string.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` holds exactly `expected`.
    pub fn assert_content(&self, name: &str, expected: &str) {
        let actual = self.read(name);
        assert_eq!(
            actual, expected,
            "File {} does not hold the expected content",
            name
        );
    }

    /// Assert that `name` does **not** exist.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that no `*.tmp` scratch files are left in the directory.
    pub fn assert_no_scratch_files(&self) {
        let leftovers: Vec<_> = fs::read_dir(self.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();

        assert!(
            leftovers.is_empty(),
            "No scratch files should remain, found: {:?}",
            leftovers
        );
    }
}
