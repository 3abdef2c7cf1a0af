//! Initialization helpers for `.metashift/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::config::{ShiftConfig, write_config};
use super::metadata_store::write_metadata;
use crate::metadata::reference_metadata;

/// All canonical paths within `.metashift/` for a project root.
#[derive(Debug, Clone)]
pub struct ShiftPaths {
    pub root: PathBuf,
    pub shift_dir: PathBuf,
    pub config_path: PathBuf,
    pub metadata_path: PathBuf,
}

impl ShiftPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let shift_dir = root.join(".metashift");
        Self {
            root: root.clone(),
            shift_dir: shift_dir.clone(),
            config_path: shift_dir.join("config.toml"),
            metadata_path: shift_dir.join("metadata.json"),
        }
    }
}

/// Options for `init_shift`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing metashift-owned files.
    pub force: bool,
}

/// Create `.metashift/` scaffolding in `root`.
///
/// Fails if `.metashift/` already exists unless `options.force` is set.
pub fn init_shift(root: &Path, options: &InitOptions) -> Result<ShiftPaths> {
    let paths = ShiftPaths::new(root);
    if paths.shift_dir.exists() && !paths.shift_dir.is_dir() {
        return Err(anyhow!(
            "metashift init: .metashift exists but is not a directory"
        ));
    }
    if paths.shift_dir.exists() && !options.force {
        return Err(anyhow!(
            "metashift init: .metashift already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.shift_dir)
        .with_context(|| format!("create directory {}", paths.shift_dir.display()))?;
    write_config(&paths.config_path, &ShiftConfig::default())?;
    write_metadata(&paths.metadata_path, &reference_metadata())?;

    Ok(paths)
}
