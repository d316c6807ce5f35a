//! Data models exchanged with the Pixora backend.
//!
//! - [`Cluster`] - a pre-computed topic cluster
//! - [`ImageResult`] - one image from a search or a cluster page
//! - [`ClusterPage`] - one page of a cluster's images plus the reported total
//! - [`SearchFilters`] / [`FilterDraft`] - committed and raw search filters

mod cluster;
mod filters;
mod image;

pub use cluster::Cluster;
pub use filters::{parse_month, parse_year, FilterDraft, SearchFilters, MONTH_NAMES, MIN_YEAR_EXCLUSIVE};
pub use image::{ClusterPage, ImageResult};

use serde::{Deserialize, Deserializer};

/// Deserialize a string that may be null or missing, mapping null to "".
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
