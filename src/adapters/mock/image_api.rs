//! Scripted [`ImageApi`] for driving the controller from tests.
//!
//! Every call is forwarded to the test as a [`ScriptedCall`] carrying a
//! oneshot responder. The test decides when, and in which order, calls
//! complete, which is how out-of-order network completion is reproduced.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::error::{ApiError, ApiResult};
use crate::models::{Cluster, ClusterPage, ImageResult, SearchFilters};
use crate::traits::ImageApi;

/// A pending API call waiting for the test to answer it.
#[derive(Debug)]
pub enum ScriptedCall {
    Clusters {
        respond: oneshot::Sender<ApiResult<Vec<Cluster>>>,
    },
    Search {
        filters: SearchFilters,
        respond: oneshot::Sender<ApiResult<Vec<ImageResult>>>,
    },
    ClusterImages {
        cluster_id: i64,
        limit: usize,
        offset: usize,
        respond: oneshot::Sender<ApiResult<ClusterPage>>,
    },
}

impl ScriptedCall {
    /// Short description for assertion messages.
    pub fn describe(&self) -> String {
        match self {
            ScriptedCall::Clusters { .. } => "clusters".to_string(),
            ScriptedCall::Search { filters, .. } => format!("search({})", filters.query),
            ScriptedCall::ClusterImages {
                cluster_id,
                limit,
                offset,
                ..
            } => format!("cluster_images({}, {}, {})", cluster_id, limit, offset),
        }
    }
}

/// An [`ImageApi`] whose calls are answered by the test.
#[derive(Debug, Clone)]
pub struct ScriptedImageApi {
    calls: mpsc::UnboundedSender<ScriptedCall>,
}

impl ScriptedImageApi {
    /// Create the API and the receiver on which its calls appear.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScriptedCall>) {
        let (calls, rx) = mpsc::unbounded_channel();
        (Self { calls }, rx)
    }

    async fn forward<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<ApiResult<T>>) -> ScriptedCall,
    ) -> ApiResult<T> {
        let (tx, rx) = oneshot::channel();
        self.calls
            .send(make(tx))
            .map_err(|_| ApiError::Network("scripted api receiver dropped".to_string()))?;
        rx.await
            .unwrap_or_else(|_| Err(ApiError::Network("scripted call dropped".to_string())))
    }
}

#[async_trait]
impl ImageApi for ScriptedImageApi {
    async fn fetch_clusters(&self) -> ApiResult<Vec<Cluster>> {
        self.forward(|respond| ScriptedCall::Clusters { respond }).await
    }

    async fn search_images(&self, filters: &SearchFilters) -> ApiResult<Vec<ImageResult>> {
        let filters = filters.clone();
        self.forward(|respond| ScriptedCall::Search { filters, respond })
            .await
    }

    async fn fetch_cluster_images(
        &self,
        cluster_id: i64,
        limit: usize,
        offset: usize,
    ) -> ApiResult<ClusterPage> {
        self.forward(|respond| ScriptedCall::ClusterImages {
            cluster_id,
            limit,
            offset,
            respond,
        })
        .await
    }
}
