//! HTTP client for the Pixora image backend.
//!
//! Wraps the three remote operations behind [`ImageApi`]. The transport is
//! any [`HttpClient`], so tests can swap reqwest for a mock.

mod wire;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::config::ExplorerConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Cluster, ClusterPage, ImageResult, SearchFilters};
use crate::traits::{Headers, HttpClient, ImageApi, Response};

use wire::{WireClusterPage, WireSearchResponse};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client for the image backend's REST API.
pub struct PixoraClient {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl PixoraClient {
    /// Create a client for `base_url` using reqwest with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_http_client(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client from configuration (base URL and request timeout).
    pub fn from_config(config: &ExplorerConfig) -> ApiResult<Self> {
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;
        Ok(Self::with_http_client(config.api_base_url.clone(), Arc::new(http)))
    }

    pub fn clusters_url(&self) -> String {
        format!("{}/clusters", self.base_url)
    }

    pub fn search_url(&self, filters: &SearchFilters) -> String {
        let query = filters
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/search?{}", self.base_url, query)
    }

    pub fn cluster_images_url(&self, cluster_id: i64, limit: usize, offset: usize) -> String {
        format!(
            "{}/clusters/{}/images?limit={}&offset={}",
            self.base_url, cluster_id, limit, offset
        )
    }

    async fn get_ok(&self, url: &str) -> ApiResult<Response> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(url, &headers).await?;
        if !response.is_success() {
            let message = response.text_lossy();
            tracing::warn!(url, status = response.status, "request failed");
            return Err(ApiError::from_status(response.status, message));
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageApi for PixoraClient {
    async fn fetch_clusters(&self) -> ApiResult<Vec<Cluster>> {
        let response = self.get_ok(&self.clusters_url()).await?;
        Ok(response.json::<Vec<Cluster>>()?)
    }

    async fn search_images(&self, filters: &SearchFilters) -> ApiResult<Vec<ImageResult>> {
        let response = self.get_ok(&self.search_url(filters)).await?;
        Ok(response.json::<WireSearchResponse>()?.into_results())
    }

    async fn fetch_cluster_images(
        &self,
        cluster_id: i64,
        limit: usize,
        offset: usize,
    ) -> ApiResult<ClusterPage> {
        let url = self.cluster_images_url(cluster_id, limit, offset);
        let response = self.get_ok(&url).await?;
        Ok(response.json::<WireClusterPage>()?.into())
    }
}
