//! Test fixtures for symdex-config unit tests: a temporary project tree with config files
//! and generated search directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// Contents of an artifact with no records.
pub const EMPTY_ARTIFACT: &str = "var searchData=\n[\n];\n";

/// A temporary project tree, removed on drop.
pub struct TestDir {
    /// Owned temporary directory.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the path to the root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory (and its parents) relative to the root.
    pub fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes an empty search artifact at `rel_path`, creating parent directories.
    pub fn create_artifact(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, EMPTY_ARTIFACT).unwrap();
        path
    }

    /// Writes `.symdex.toml` with `content` into `rel_dir` ("" for the root).
    pub fn create_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let config = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&config, content).unwrap();
        config
    }
}
