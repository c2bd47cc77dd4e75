//! Recursive discovery of candidate source files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walks a root directory and yields files whose name ends in an allowed
/// extension. Restartable: every call to [`SourceWalker::files`] starts over.
#[derive(Debug, Clone)]
pub struct SourceWalker {
    root: PathBuf,
    suffixes: Vec<String>,
}

impl SourceWalker {
    pub fn new<S: AsRef<str>>(root: impl Into<PathBuf>, extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        Self {
            root: root.into(),
            suffixes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Lazily enumerate matching files in file-name order.
    ///
    /// A missing root, or a root that is not a directory, yields nothing.
    /// Symlinked files are yielded; symlinked directories are not descended.
    /// Errors below the root are yielded as `Err` items so the caller decides
    /// whether to stop.
    pub fn files(&self) -> Box<dyn Iterator<Item = Result<PathBuf>> + '_> {
        if !self.root.is_dir() {
            warn!(root = %self.root.display(), "root is not an existing directory");
            return Box::new(std::iter::empty::<Result<PathBuf>>());
        }
        let walk = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    // `path().is_file()` follows symlinks; `file_type()` does not.
                    if !self.matches(entry.path()) || !entry.path().is_file() {
                        return None;
                    }
                    debug!(path = %entry.path().display(), "candidate file");
                    Some(Ok(entry.into_path()))
                }
                Err(err) => {
                    let at = err
                        .path()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    Some(Err(err).with_context(|| format!("walk {at}")))
                }
            });
        Box::new(walk)
    }
}

/// `ts` and `.ts` both become `.ts`.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
