//! Metashift configuration stored under `.metashift/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::metadata::REFERENCE_SEED;

/// How rotated lists are printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Indented multi-line JSON.
    Pretty,
}

/// Metashift configuration (TOML).
///
/// Missing fields fall back to the reference seed and compact output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShiftConfig {
    /// Seed applied when `--seed` is not given.
    pub seed: i64,

    /// Output format applied when `--pretty` is not given.
    pub output: OutputFormat,

    /// Metadata JSON file to rotate instead of the reference list.
    /// Relative paths resolve against the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            seed: REFERENCE_SEED,
            output: OutputFormat::Compact,
            input: None,
        }
    }
}

impl ShiftConfig {
    pub fn validate(&self) -> Result<()> {
        if self
            .input
            .as_ref()
            .is_some_and(|input| input.as_os_str().is_empty())
        {
            return Err(anyhow!("input must be a non-empty path when set"));
        }
        Ok(())
    }

    /// Resolve the configured input path against `root`.
    pub fn input_path(&self, root: &Path) -> Option<PathBuf> {
        self.input.as_ref().map(|input| root.join(input))
    }
}

/// Load config from a TOML file, or the defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<ShiftConfig> {
    let cfg = if path.is_file() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read metashift config {}", path.display()))?;
        toml::from_str::<ShiftConfig>(&contents)
            .with_context(|| format!("parse metashift config {}", path.display()))?
    } else {
        ShiftConfig::default()
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ShiftConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("no parent directory for {}", path.display()))?;
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let staged = path.with_extension("toml.tmp");
    fs::write(&staged, contents)
        .with_context(|| format!("stage metashift config {}", staged.display()))?;
    fs::rename(&staged, path)
        .with_context(|| format!("install metashift config {}", path.display()))?;
    Ok(())
}
