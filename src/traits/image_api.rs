//! The typed API boundary consumed by the view controller.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Cluster, ClusterPage, ImageResult, SearchFilters};

/// Remote operations of the image backend.
///
/// [`crate::client::PixoraClient`] is the HTTP implementation;
/// [`crate::adapters::mock::ScriptedImageApi`] lets tests decide when and
/// in which order calls complete.
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Fetch every topic cluster.
    async fn fetch_clusters(&self) -> ApiResult<Vec<Cluster>>;

    /// Run a free-text search with optional year, month and city filters.
    async fn search_images(&self, filters: &SearchFilters) -> ApiResult<Vec<ImageResult>>;

    /// Fetch `limit` images of a cluster starting at `offset`.
    async fn fetch_cluster_images(
        &self,
        cluster_id: i64,
        limit: usize,
        offset: usize,
    ) -> ApiResult<ClusterPage>;
}
