//! Test-only helpers for building metadata lists.

use crate::metadata::MetadataItem;

/// Build a metadata list from raw ids, preserving order.
pub fn items(ids: &[u32]) -> Vec<MetadataItem> {
    ids.iter().copied().map(MetadataItem::new).collect()
}

/// Project a metadata list back to its ids.
pub fn ids(items: &[MetadataItem]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

/// Temporary project root with `.metashift/` initialized.
#[cfg(feature = "test-support")]
pub struct TestRoot {
    dir: tempfile::TempDir,
}

#[cfg(feature = "test-support")]
impl TestRoot {
    pub fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        crate::io::init::init_shift(dir.path(), &crate::io::init::InitOptions { force: false })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn paths(&self) -> crate::io::init::ShiftPaths {
        crate::io::init::ShiftPaths::new(self.path())
    }
}
