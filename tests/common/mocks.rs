//! Test doubles for the image API.
//!
//! Re-exports the library's mocks and adds [`FakeGallery`], a canned
//! backend that pages deterministic images the way the real one does.

#![allow(dead_code)]

pub use pixora::adapters::mock::{MockHttpClient, MockResponse, ScriptedCall, ScriptedImageApi};

use async_trait::async_trait;
use pixora::error::{ApiError, ApiResult};
use pixora::models::{Cluster, ClusterPage, ImageResult, SearchFilters};
use pixora::traits::ImageApi;
use std::collections::HashMap;
use std::sync::Mutex;

/// Locator of image `index` (0-based) in `cluster_id`.
pub fn cluster_image(cluster_id: i64, index: usize) -> String {
    format!("clusters/{}/{}.jpg", cluster_id, index)
}

/// In-memory backend with a fixed set of clusters.
#[derive(Default)]
pub struct FakeGallery {
    clusters: Vec<Cluster>,
    totals: HashMap<i64, usize>,
    search_results: Vec<ImageResult>,
    fail_clusters: bool,
    fail_search: bool,
    calls: Mutex<Vec<String>>,
    searches: Mutex<Vec<SearchFilters>>,
}

impl FakeGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cluster holding `total` images.
    pub fn with_cluster(mut self, id: i64, total: usize) -> Self {
        self.clusters
            .push(Cluster::new(id, total as u64, format!("thumbs/{}.jpg", id)));
        self.totals.insert(id, total);
        self
    }

    pub fn with_search_results(mut self, results: Vec<ImageResult>) -> Self {
        self.search_results = results;
        self
    }

    pub fn failing_clusters(mut self) -> Self {
        self.fail_clusters = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Calls received so far, e.g. `clusters`, `search(cats)`,
    /// `cluster_images(3, 20, 40)`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<SearchFilters> {
        self.searches.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ImageApi for FakeGallery {
    async fn fetch_clusters(&self) -> ApiResult<Vec<Cluster>> {
        self.record("clusters".to_string());
        if self.fail_clusters {
            return Err(ApiError::from_status(500, "internal error"));
        }
        Ok(self.clusters.clone())
    }

    async fn search_images(&self, filters: &SearchFilters) -> ApiResult<Vec<ImageResult>> {
        self.record(format!("search({})", filters.query));
        self.searches.lock().unwrap().push(filters.clone());
        if self.fail_search {
            return Err(ApiError::Network("connection reset".to_string()));
        }
        Ok(self.search_results.clone())
    }

    async fn fetch_cluster_images(
        &self,
        cluster_id: i64,
        limit: usize,
        offset: usize,
    ) -> ApiResult<ClusterPage> {
        self.record(format!("cluster_images({}, {}, {})", cluster_id, limit, offset));
        let total = *self
            .totals
            .get(&cluster_id)
            .ok_or_else(|| ApiError::NotFound(format!("cluster {}", cluster_id)))?;
        let end = (offset + limit).min(total);
        let items = (offset.min(end)..end)
            .map(|i| ImageResult::new(cluster_image(cluster_id, i)))
            .collect();
        Ok(ClusterPage::new(items, total))
    }
}
