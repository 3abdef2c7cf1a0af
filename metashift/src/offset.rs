//! Orchestration for `metashift offset`.
//!
//! Resolves the seed, input list, and output format from the command line
//! with `.metashift/config.toml` as fallback, then hands the list to the pure
//! rotation in [`crate::core::rotate`].
//!
//! Input precedence: `--input`, then config `input`, then
//! `.metashift/metadata.json` if present, then the reference list.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::rotate::{normalized_offset, rotate_by_offset};
use crate::io::config::{OutputFormat, load_config};
use crate::io::init::ShiftPaths;
use crate::io::metadata_store::{load_metadata, render_metadata};
use crate::metadata::{MetadataItem, reference_metadata};

/// Per-invocation overrides. `None` defers to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetRequest {
    pub seed: Option<i64>,
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Rotated list plus the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetOutcome {
    pub seed: i64,
    /// `seed` reduced into `[0, items.len())`.
    pub offset: usize,
    pub items: Vec<MetadataItem>,
    pub format: OutputFormat,
}

impl OffsetOutcome {
    pub fn render(&self) -> Result<String> {
        render_metadata(&self.items, self.format)
    }
}

/// Rotate `items` by `seed`, returning the normalized offset alongside.
pub fn offset_items(items: &[MetadataItem], seed: i64) -> Result<(usize, Vec<MetadataItem>)> {
    let offset = normalized_offset(seed, items.len())?;
    Ok((offset, rotate_by_offset(items, offset)))
}

/// Load config under `root`, resolve the request, and rotate.
pub fn offset_metadata(root: &Path, request: &OffsetRequest) -> Result<OffsetOutcome> {
    let paths = ShiftPaths::new(root);
    let config = load_config(&paths.config_path).context("load config.toml")?;

    let seed = request.seed.unwrap_or(config.seed);
    let format = request.format.unwrap_or(config.output);
    let input = request
        .input
        .clone()
        .or_else(|| config.input_path(root))
        .or_else(|| {
            paths
                .metadata_path
                .is_file()
                .then(|| paths.metadata_path.clone())
        });

    let items = match &input {
        Some(path) => load_metadata(path)?,
        None => reference_metadata(),
    };
    debug!(
        seed,
        len = items.len(),
        input = ?input.as_deref().map(Path::display),
        "metadata resolved"
    );

    let (offset, items) = offset_items(&items, seed)?;
    debug!(seed, offset, "metadata rotated");

    Ok(OffsetOutcome {
        seed,
        offset,
        items,
        format,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::rotate::RotateError;
    use crate::io::config::{ShiftConfig, write_config};
    use crate::io::init::{InitOptions, init_shift};
    use crate::io::metadata_store::write_metadata;
    use crate::metadata::REFERENCE_SEED;
    use crate::test_support::{ids, items};

    #[test]
    fn defaults_rotate_reference_by_reference_seed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = offset_metadata(temp.path(), &OffsetRequest::default()).expect("offset");
        assert_eq!(outcome.seed, REFERENCE_SEED);
        assert_eq!(outcome.offset, 4);
        assert_eq!(ids(&outcome.items), vec![4, 5, 6, 7, 8, 9, 0, 1, 2, 3]);
        assert_eq!(outcome.format, OutputFormat::Compact);
    }

    #[test]
    fn request_seed_overrides_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = ShiftPaths::new(temp.path());
        let cfg = ShiftConfig {
            seed: 3,
            ..ShiftConfig::default()
        };
        write_config(&paths.config_path, &cfg).expect("write config");

        let from_config = offset_metadata(temp.path(), &OffsetRequest::default()).expect("offset");
        assert_eq!(ids(&from_config.items), vec![3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);

        let request = OffsetRequest {
            seed: Some(-1),
            ..OffsetRequest::default()
        };
        let overridden = offset_metadata(temp.path(), &request).expect("offset");
        assert_eq!(overridden.offset, 9);
        assert_eq!(ids(&overridden.items), vec![9, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn config_input_resolves_against_root() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = ShiftPaths::new(temp.path());
        write_metadata(&temp.path().join("list.json"), &items(&[10, 20, 30])).expect("write");
        let cfg = ShiftConfig {
            seed: 1,
            input: Some(PathBuf::from("list.json")),
            ..ShiftConfig::default()
        };
        write_config(&paths.config_path, &cfg).expect("write config");

        let outcome = offset_metadata(temp.path(), &OffsetRequest::default()).expect("offset");
        assert_eq!(ids(&outcome.items), vec![20, 30, 10]);
    }

    #[test]
    fn initialized_metadata_file_is_used_when_no_input_is_set() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_shift(temp.path(), &InitOptions { force: false }).expect("init");
        write_metadata(&paths.metadata_path, &items(&[10, 20, 30])).expect("write");

        let request = OffsetRequest {
            seed: Some(1),
            ..OffsetRequest::default()
        };
        let outcome = offset_metadata(temp.path(), &request).expect("offset");
        assert_eq!(ids(&outcome.items), vec![20, 30, 10]);
    }

    #[test]
    fn config_input_takes_precedence_over_metadata_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_shift(temp.path(), &InitOptions { force: false }).expect("init");
        write_metadata(&temp.path().join("list.json"), &items(&[7, 8])).expect("write");
        let cfg = ShiftConfig {
            seed: 1,
            input: Some(PathBuf::from("list.json")),
            ..ShiftConfig::default()
        };
        write_config(&paths.config_path, &cfg).expect("write config");

        let outcome = offset_metadata(temp.path(), &OffsetRequest::default()).expect("offset");
        assert_eq!(ids(&outcome.items), vec![8, 7]);
    }

    #[test]
    fn empty_input_surfaces_invalid_argument() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("empty.json");
        fs::write(&input, "[]").expect("write");
        let request = OffsetRequest {
            seed: Some(5),
            input: Some(input),
            ..OffsetRequest::default()
        };

        let err = offset_metadata(temp.path(), &request).expect_err("empty");
        assert_eq!(
            err.downcast_ref::<RotateError>(),
            Some(&RotateError::InvalidArgument)
        );
    }

    #[test]
    fn render_uses_resolved_format() {
        let temp = tempfile::tempdir().expect("tempdir");
        let request = OffsetRequest {
            seed: Some(0),
            format: Some(OutputFormat::Pretty),
            ..OffsetRequest::default()
        };
        let outcome = offset_metadata(temp.path(), &request).expect("offset");
        let rendered = outcome.render().expect("render");
        assert!(rendered.starts_with("[\n  {\n    \"id\": 0"));
    }
}
