use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// A topic cluster computed by the backend.
///
/// Clusters are immutable once fetched. The whole list is replaced on every
/// successful refresh, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cluster {
    /// Unique cluster identifier
    pub id: i64,
    /// Number of images in the cluster
    #[serde(default)]
    pub count: u64,
    /// Opaque locator of the representative image (may be empty)
    #[serde(default, deserialize_with = "deserialize_nullable_string", alias = "thumbnail_ref")]
    pub thumbnail: String,
}

impl Cluster {
    pub fn new(id: i64, count: u64, thumbnail: impl Into<String>) -> Self {
        Self {
            id,
            count,
            thumbnail: thumbnail.into(),
        }
    }

    /// Whether the backend supplied a thumbnail locator at all.
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.trim().is_empty()
    }
}
