//! Metadata records and the built-in reference list.

use serde::{Deserialize, Serialize};

/// Seed used when neither the command line nor the config supplies one.
pub const REFERENCE_SEED: i64 = 720_823_774;

/// Number of entries in the reference list.
pub const REFERENCE_LEN: u32 = 10;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct MetadataItem {
    pub id: u32,
}

impl MetadataItem {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

/// The fixed reference list: ids `0..10` in ascending order.
pub fn reference_metadata() -> Vec<MetadataItem> {
    (0..REFERENCE_LEN).map(MetadataItem::new).collect()
}
