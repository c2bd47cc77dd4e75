//! Orchestration for `lintfix fix` and `lintfix check`.
//!
//! Walks the configured root, runs the rule set over each candidate file, and
//! writes changed files back. Progress lines go to the supplied writer; the
//! counters come back as a [`RunSummary`].

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::rules::{FileState, RuleSet};
use crate::core::summary::{FileFailure, FileReport, RunSummary};
use crate::io::config::{ErrorPolicy, FixerConfig};
use crate::io::source_file::{read_source, write_source};
use crate::io::walker::SourceWalker;

/// Whether changed files are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    /// Report what would change without touching any file.
    Check,
}

impl Mode {
    fn file_line(self) -> &'static str {
        match self {
            Mode::Write => "Fixed",
            Mode::Check => "Would fix",
        }
    }
}

/// Read one file, apply `rules`, and write it back if it changed.
pub fn fix_file(path: &Path, rules: &RuleSet, mode: Mode) -> Result<FileReport> {
    let original = read_source(path)?;
    let rewrite = rules.apply(&original);
    if rewrite.state == FileState::Modified && mode == Mode::Write {
        write_source(path, &rewrite.content)?;
    }
    Ok(FileReport {
        path: path.to_path_buf(),
        state: rewrite.state,
        fixes: rewrite.fixes,
    })
}

/// Run the fixer over `config.root`.
///
/// Under [`ErrorPolicy::Abort`] the first I/O error ends the run. Under
/// [`ErrorPolicy::Continue`] failures are collected in the summary.
pub fn run_fix(config: &FixerConfig, mode: Mode, out: &mut impl Write) -> Result<RunSummary> {
    config.validate()?;
    let rules = RuleSet::from_ids(config.rules.as_slice())?;
    let walker = SourceWalker::new(&config.root, config.extensions.as_slice());
    info!(
        root = %config.root.display(),
        rules = ?rules.ids().collect::<Vec<_>>(),
        ?mode,
        "starting run"
    );

    let mut summary = RunSummary::default();
    for candidate in walker.files() {
        let result = match candidate {
            Ok(path) => fix_file(&path, &rules, mode).map_err(|err| (Some(path), err)),
            Err(err) => Err((None, err)),
        };
        let report = match result {
            Ok(report) => report,
            Err((path, err)) if config.on_error == ErrorPolicy::Continue => {
                let message = format!("{err:#}");
                warn!(error = %message, "skipping file");
                summary.record_failure(FileFailure { path, message });
                continue;
            }
            Err((_, err)) => return Err(err),
        };

        debug!(path = %report.path.display(), state = ?report.state, fixes = report.fixes, "visited");
        if report.state == FileState::Modified {
            writeln!(out, "{}: {}", mode.file_line(), report.path.display())
                .context("write progress")?;
        }
        summary.record(&report);
    }

    writeln!(out, "{} {} files", mode.file_line(), summary.files_modified)
        .context("write summary")?;
    info!(
        visited = summary.files_visited,
        modified = summary.files_modified,
        fixes = summary.total_fixes,
        failures = summary.failures.len(),
        "run finished"
    );
    Ok(summary)
}
