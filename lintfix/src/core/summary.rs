//! Per-run counters, passed through the traversal instead of living in globals.

use std::path::PathBuf;

use crate::core::rules::FileState;

/// Outcome for one visited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub state: FileState,
    pub fixes: usize,
}

/// A file that could not be processed under the `continue` error policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// `None` when the traversal itself failed before yielding a path.
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Counters for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_visited: usize,
    pub files_modified: usize,
    pub total_fixes: usize,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.files_visited += 1;
        if report.state == FileState::Modified {
            self.files_modified += 1;
            self.total_fixes += report.fixes;
        }
    }

    pub fn record_failure(&mut self, failure: FileFailure) {
        self.failures.push(failure);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
