//! Metadata list load/save helpers with schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;

use crate::io::config::OutputFormat;
use crate::metadata::MetadataItem;

pub const METADATA_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/metadata/v1.schema.json"
));

/// Load and validate a metadata list from disk.
///
/// An empty array passes validation; rotation is what rejects it.
pub fn load_metadata(path: &Path) -> Result<Vec<MetadataItem>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read metadata {}", path.display()))?;
    parse_metadata(&contents).with_context(|| format!("load metadata {}", path.display()))
}

/// Parse and validate a metadata list from JSON text.
pub fn parse_metadata(contents: &str) -> Result<Vec<MetadataItem>> {
    let value: Value = serde_json::from_str(contents).context("parse metadata json")?;
    validate_schema(&value)?;
    let items: Vec<MetadataItem> =
        serde_json::from_value(value).context("deserialize metadata list")?;
    Ok(items)
}

/// Write a metadata list as pretty JSON with trailing newline.
pub fn write_metadata(path: &Path, items: &[MetadataItem]) -> Result<()> {
    let mut buf = render_metadata(items, OutputFormat::Pretty)?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write metadata {}", path.display()))
}

/// Render a metadata list as JSON in the requested format.
pub fn render_metadata(items: &[MetadataItem], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Compact => serde_json::to_string(items),
        OutputFormat::Pretty => serde_json::to_string_pretty(items),
    };
    rendered.context("serialize metadata list")
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(METADATA_SCHEMA).context("parse embedded metadata schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "metadata schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
