//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The tree root is a directory named `project` inside a fresh temp dir, so
/// rendered output always starts with `project/`. Everything is removed when
/// the value is dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    pub const ROOT_NAME: &'static str = "project";

    /// Create a new empty project directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(Self::ROOT_NAME);
        fs::create_dir(&root).expect("Failed to create project dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the project directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Change the Unix permission bits of a path inside the project.
    ///
    /// `"."` targets the project directory itself without traversing it, so
    /// permissions can be restored after a `0o000`.
    #[cfg(unix)]
    pub fn set_mode(&self, path: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;

        let full_path = if path == "." {
            self.root.clone()
        } else {
            self.root.join(path)
        };
        let mut perms = fs::metadata(&full_path)
            .expect("Failed to stat path")
            .permissions();
        perms.set_mode(mode);
        fs::set_permissions(&full_path, perms).expect("Failed to set permissions");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
