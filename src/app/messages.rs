//! AppMessage enum for async communication within the application.

use crate::error::ApiResult;
use crate::models::{Cluster, ClusterPage, ImageResult};
use crate::state::Generation;

/// Results of spawned API calls, delivered back to the main loop.
///
/// Each carries the generation it was issued with.
#[derive(Debug, Clone)]
pub enum AppMessage {
    ClustersLoaded {
        generation: Generation,
        result: ApiResult<Vec<Cluster>>,
    },
    SearchCompleted {
        generation: Generation,
        result: ApiResult<Vec<ImageResult>>,
    },
    ClusterPageLoaded {
        generation: Generation,
        cluster_id: i64,
        page: usize,
        result: ApiResult<ClusterPage>,
    },
}

impl AppMessage {
    pub fn generation(&self) -> Generation {
        match self {
            AppMessage::ClustersLoaded { generation, .. }
            | AppMessage::SearchCompleted { generation, .. }
            | AppMessage::ClusterPageLoaded { generation, .. } => *generation,
        }
    }
}
