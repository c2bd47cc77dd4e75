//! Test-only helpers for building throwaway source trees.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::FixerConfig;

/// A temporary project directory. Files are addressed relative to its root.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) {
        self.write_bytes(rel, contents.as_bytes());
    }

    pub fn write_bytes(&self, rel: &str, contents: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture file");
    }

    /// Mark `rel` read-only so write-back to it fails.
    pub fn set_read_only(&self, rel: &str) {
        let path = self.path(rel);
        let mut perms = fs::metadata(&path).expect("stat fixture file").permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).expect("chmod fixture file");
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read fixture file")
    }

    /// Default config pointed at `<root>/src`.
    pub fn config(&self) -> FixerConfig {
        FixerConfig {
            root: self.path("src"),
            ..FixerConfig::default()
        }
    }
}
