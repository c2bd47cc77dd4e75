//! Fixer configuration, optionally stored in `lintfix.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::rules::{CATALOGUE, find_rule};

pub const DEFAULT_CONFIG_FILE: &str = "lintfix.toml";

/// What to do when a file cannot be read or written.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first I/O error.
    #[default]
    Abort,
    /// Record the failure, report it, and move on to the next file.
    Continue,
}

/// Fixer configuration (TOML).
///
/// Missing fields default to the values the tool has always used: `src`,
/// `.ts`/`.tsx`, abort on error, every known rule.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixerConfig {
    /// Directory to traverse.
    pub root: PathBuf,

    /// File-name suffixes to visit, with or without the leading dot.
    pub extensions: Vec<String>,

    pub on_error: ErrorPolicy,

    /// Rule ids to apply, in order.
    pub rules: Vec<String>,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src"),
            extensions: vec!["ts".to_string(), "tsx".to_string()],
            on_error: ErrorPolicy::Abort,
            rules: CATALOGUE.iter().map(|rule| rule.id.to_string()).collect(),
        }
    }
}

impl FixerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!("root must not be empty"));
        }
        if self.extensions.is_empty() {
            return Err(anyhow!("extensions must be a non-empty array"));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(anyhow!("invalid extension '{bad}'"));
        }
        for id in &self.rules {
            if find_rule(id).is_none() {
                return Err(anyhow!("unknown rule '{id}'"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FixerConfig::default()`.
pub fn load_config(path: &Path) -> Result<FixerConfig> {
    if !path.exists() {
        let cfg = FixerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
