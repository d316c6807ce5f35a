//! The display mode of the explorer.

use crate::models::{ImageResult, SearchFilters};

/// Results of the most recent committed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub filters: SearchFilters,
    pub images: Vec<ImageResult>,
    pub loading: bool,
}

impl SearchResults {
    pub fn pending(filters: SearchFilters) -> Self {
        Self {
            filters,
            images: Vec::new(),
            loading: true,
        }
    }
}

/// Paging state for the selected cluster.
///
/// `images` only grows until the browse state is reset, and never holds
/// more than `total` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterBrowse {
    pub cluster_id: i64,
    pub images: Vec<ImageResult>,
    /// Total reported by the backend; 0 until the first page arrives
    pub total: usize,
    /// Last page successfully applied
    pub current_page: usize,
    /// Page whose request is in flight
    pub pending_page: Option<usize>,
}

impl ClusterBrowse {
    pub fn new(cluster_id: i64) -> Self {
        Self {
            cluster_id,
            images: Vec::new(),
            total: 0,
            current_page: 0,
            pending_page: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.images.len() < self.total
    }

    pub fn is_loading(&self) -> bool {
        self.pending_page.is_some()
    }
}

/// Exactly one display mode is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Cluster list
    #[default]
    Overview,
    SearchResults(SearchResults),
    ClusterBrowse(ClusterBrowse),
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::SearchResults(_) => "search_results",
            ViewMode::ClusterBrowse(_) => "cluster_browse",
        }
    }

    /// Images shown in the current mode; empty for the overview.
    pub fn images(&self) -> &[ImageResult] {
        match self {
            ViewMode::Overview => &[],
            ViewMode::SearchResults(results) => &results.images,
            ViewMode::ClusterBrowse(browse) => &browse.images,
        }
    }

    pub fn as_browse(&self) -> Option<&ClusterBrowse> {
        match self {
            ViewMode::ClusterBrowse(browse) => Some(browse),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchResults> {
        match self {
            ViewMode::SearchResults(results) => Some(results),
            _ => None,
        }
    }
}
