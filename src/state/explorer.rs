//! The explorer's view state machine.
//!
//! [`ExplorerState`] owns everything the UI shows: the cluster list, the
//! active [`ViewMode`] and the single error slot. Transitions return the
//! [`Command`]s to run; completions come back through the `finish_*`
//! methods, which drop any response whose generation was superseded.

use tracing::{debug, info, warn};

use super::{
    ApplyOutcome, ClusterBrowse, Command, Generation, RequestSequencer, SearchResults, ViewMode,
};
use crate::error::ApiResult;
use crate::models::{Cluster, ClusterPage, FilterDraft, ImageResult, SearchFilters};

/// Images requested per cluster page.
pub const PAGE_SIZE: usize = 20;

pub const CLUSTERS_ERROR: &str = "Failed to load clusters.";

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    clusters: Vec<Cluster>,
    clusters_loading: bool,
    mode: ViewMode,
    error: Option<String>,
    cluster_seq: RequestSequencer,
    search_seq: RequestSequencer,
    page_seq: RequestSequencer,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn is_loading_clusters(&self) -> bool {
        self.clusters_loading
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Images visible in the current mode.
    pub fn images(&self) -> &[ImageResult] {
        self.mode.images()
    }

    /// Whether any request that affects the current mode is outstanding.
    pub fn is_busy(&self) -> bool {
        match &self.mode {
            ViewMode::Overview => self.clusters_loading,
            ViewMode::SearchResults(results) => results.loading,
            ViewMode::ClusterBrowse(browse) => browse.is_loading(),
        }
    }

    // ------------------------------------------------------------------------
    // Cluster list
    // ------------------------------------------------------------------------

    /// Request the cluster list. Issued on startup and on manual reload.
    pub fn load_clusters(&mut self) -> Command {
        self.error = None;
        self.clusters_loading = true;
        let generation = self.cluster_seq.issue();
        info!(%generation, "loading clusters");
        Command::FetchClusters { generation }
    }

    pub fn finish_clusters(
        &mut self,
        generation: Generation,
        result: ApiResult<Vec<Cluster>>,
    ) -> ApplyOutcome {
        if !self.cluster_seq.is_current(generation) {
            debug!(%generation, "discarding stale cluster list");
            return ApplyOutcome::Stale;
        }
        self.clusters_loading = false;
        match result {
            Ok(clusters) => {
                debug!(count = clusters.len(), "clusters loaded");
                self.clusters = clusters;
            }
            Err(err) => {
                warn!(error = %err, "failed to load clusters");
                self.error = Some(CLUSTERS_ERROR.to_string());
            }
        }
        ApplyOutcome::Applied
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Commit a search. Returns `None` and leaves state untouched for a
    /// blank query.
    pub fn submit_search(&mut self, raw_query: &str, draft: &FilterDraft) -> Option<Command> {
        let filters = SearchFilters::normalize(raw_query, draft)?;

        self.error = None;
        self.page_seq.invalidate();
        self.mode = ViewMode::SearchResults(SearchResults::pending(filters.clone()));

        let generation = self.search_seq.issue();
        info!(%generation, query = %filters.query, "searching");
        Some(Command::Search {
            generation,
            filters,
        })
    }

    pub fn finish_search(
        &mut self,
        generation: Generation,
        result: ApiResult<Vec<ImageResult>>,
    ) -> ApplyOutcome {
        if !self.search_seq.is_current(generation) {
            debug!(%generation, "discarding stale search response");
            return ApplyOutcome::Stale;
        }
        let ViewMode::SearchResults(results) = &mut self.mode else {
            debug!(%generation, "search response arrived outside search mode");
            return ApplyOutcome::Stale;
        };

        results.loading = false;
        match result {
            Ok(images) => {
                debug!(count = images.len(), "search results loaded");
                results.images = images;
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                results.images.clear();
                self.error = Some(format!("Search error occurred. {}", err.user_message()));
            }
        }
        ApplyOutcome::Applied
    }

    // ------------------------------------------------------------------------
    // Cluster browsing
    // ------------------------------------------------------------------------

    /// Enter cluster browse mode for `cluster_id` and request its first page.
    pub fn select_cluster(&mut self, cluster_id: i64) -> Command {
        self.error = None;
        self.search_seq.invalidate();
        info!(cluster_id, "cluster selected");
        let mut browse = ClusterBrowse::new(cluster_id);
        let command = request_page(&mut self.page_seq, &mut browse, 0);
        self.mode = ViewMode::ClusterBrowse(browse);
        command
    }

    /// Request `page` of the selected cluster. `None` outside browse mode.
    pub fn load_cluster_page(&mut self, page: usize) -> Option<Command> {
        let ViewMode::ClusterBrowse(browse) = &mut self.mode else {
            return None;
        };
        self.error = None;
        Some(request_page(&mut self.page_seq, browse, page))
    }

    /// Request the next page, unless everything is loaded or a page is
    /// already in flight.
    pub fn load_more(&mut self) -> Option<Command> {
        let browse = self.mode.as_browse()?;
        if browse.is_loading() || !browse.has_more() {
            return None;
        }
        let next = browse.current_page + 1;
        self.load_cluster_page(next)
    }

    /// Apply a page. Page 0 replaces the image list, later pages append.
    pub fn finish_cluster_page(
        &mut self,
        generation: Generation,
        cluster_id: i64,
        page: usize,
        result: ApiResult<ClusterPage>,
    ) -> ApplyOutcome {
        if !self.page_seq.is_current(generation) {
            debug!(%generation, cluster_id, page, "discarding stale cluster page");
            return ApplyOutcome::Stale;
        }
        let browse = match &mut self.mode {
            ViewMode::ClusterBrowse(browse) if browse.cluster_id == cluster_id => browse,
            _ => {
                debug!(%generation, cluster_id, "page for a cluster no longer shown");
                return ApplyOutcome::Stale;
            }
        };

        browse.pending_page = None;
        match result {
            Ok(ClusterPage { items, total }) => {
                if page == 0 {
                    browse.images.clear();
                }
                let received = items.len();
                browse.images.extend(items);
                browse.total = total;
                browse.current_page = page;

                if browse.images.len() > total {
                    warn!(
                        cluster_id,
                        loaded = browse.images.len(),
                        total,
                        "page exceeds reported total, truncating"
                    );
                    browse.images.truncate(total);
                } else if received == 0 && browse.images.len() < total {
                    warn!(
                        cluster_id,
                        page,
                        loaded = browse.images.len(),
                        total,
                        "empty page before reported total, stopping pagination"
                    );
                    browse.total = browse.images.len();
                }
                debug!(cluster_id, page, loaded = browse.images.len(), total, "cluster page applied");
            }
            Err(err) => {
                warn!(cluster_id, page, error = %err, "failed to load cluster page");
                self.error = Some(format!(
                    "Failed to load images for cluster {}. {}",
                    cluster_id,
                    err.user_message()
                ));
            }
        }
        ApplyOutcome::Applied
    }

    // ------------------------------------------------------------------------
    // Navigation and errors
    // ------------------------------------------------------------------------

    /// Return to the cluster overview. The cluster list is kept as is.
    pub fn show_all_clusters(&mut self) {
        self.error = None;
        self.search_seq.invalidate();
        self.page_seq.invalidate();
        if !matches!(self.mode, ViewMode::Overview) {
            debug!(from = self.mode.name(), "back to overview");
        }
        self.mode = ViewMode::Overview;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

fn request_page(seq: &mut RequestSequencer, browse: &mut ClusterBrowse, page: usize) -> Command {
    let generation = seq.issue();
    browse.pending_page = Some(page);
    debug!(%generation, cluster_id = browse.cluster_id, page, "requesting cluster page");
    Command::FetchClusterPage {
        generation,
        cluster_id: browse.cluster_id,
        page,
        limit: PAGE_SIZE,
        offset: page * PAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn images(prefix: &str, range: std::ops::Range<usize>) -> Vec<ImageResult> {
        range.map(|i| ImageResult::new(format!("{}/{}.jpg", prefix, i))).collect()
    }

    fn page_command(cmd: &Command) -> (Generation, i64, usize, usize, usize) {
        match cmd {
            Command::FetchClusterPage {
                generation,
                cluster_id,
                page,
                limit,
                offset,
            } => (*generation, *cluster_id, *page, *limit, *offset),
            other => panic!("expected page command, got {:?}", other),
        }
    }

    fn search_generation(cmd: &Command) -> Generation {
        match cmd {
            Command::Search { generation, .. } => *generation,
            other => panic!("expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state_is_overview() {
        let state = ExplorerState::new();
        assert_eq!(state.mode(), &ViewMode::Overview);
        assert!(state.clusters().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_load_clusters_success_replaces_list() {
        let mut state = ExplorerState::new();
        let cmd = state.load_clusters();
        assert!(state.is_loading_clusters());

        let outcome = state.finish_clusters(
            cmd.generation(),
            Ok(vec![Cluster::new(1, 24, ""), Cluster::new(2, 13, "t.jpg")]),
        );
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(!state.is_loading_clusters());
        assert_eq!(state.clusters().len(), 2);
    }

    #[test]
    fn test_load_clusters_failure_keeps_previous_list() {
        let mut state = ExplorerState::new();
        let first = state.load_clusters();
        state.finish_clusters(first.generation(), Ok(vec![Cluster::new(1, 5, "")]));

        let reload = state.load_clusters();
        state.finish_clusters(reload.generation(), Err(ApiError::Network("down".into())));

        assert_eq!(state.error(), Some(CLUSTERS_ERROR));
        assert_eq!(state.clusters().len(), 1);
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut state = ExplorerState::new();
        state.error = Some("previous".to_string());
        assert!(state.submit_search("   ", &FilterDraft::default()).is_none());
        assert_eq!(state.mode(), &ViewMode::Overview);
        assert_eq!(state.error(), Some("previous"));
    }

    #[test]
    fn test_search_filters_normalized_in_command() {
        let mut state = ExplorerState::new();
        let cmd = state
            .submit_search(" beach ", &FilterDraft::new("", "1850", "7"))
            .unwrap();
        match cmd {
            Command::Search { filters, .. } => {
                assert_eq!(filters.query, "beach");
                assert_eq!(filters.year, None);
                assert_eq!(filters.month, Some(7));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(state.is_busy());
    }

    #[test]
    fn test_newer_search_supersedes_older() {
        let mut state = ExplorerState::new();
        let a = search_generation(&state.submit_search("a", &FilterDraft::default()).unwrap());
        let b = search_generation(&state.submit_search("b", &FilterDraft::default()).unwrap());

        assert_eq!(state.finish_search(b, Ok(images("b", 0..2))), ApplyOutcome::Applied);
        assert_eq!(state.finish_search(a, Ok(images("a", 0..5))), ApplyOutcome::Stale);

        let results = state.mode().as_search().unwrap();
        assert_eq!(results.filters.query, "b");
        assert_eq!(results.images, images("b", 0..2));
    }

    #[test]
    fn test_stale_search_failure_leaves_error_slot() {
        let mut state = ExplorerState::new();
        let a = search_generation(&state.submit_search("a", &FilterDraft::default()).unwrap());
        let b = search_generation(&state.submit_search("b", &FilterDraft::default()).unwrap());
        state.finish_search(b, Ok(vec![]));

        let outcome = state.finish_search(a, Err(ApiError::Network("late".into())));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_search_failure_clears_results_and_sets_error() {
        let mut state = ExplorerState::new();
        let g = search_generation(&state.submit_search("cats", &FilterDraft::default()).unwrap());
        state.finish_search(g, Err(ApiError::from_status(500, "boom")));

        let results = state.mode().as_search().unwrap();
        assert!(results.images.is_empty());
        assert!(!results.loading);
        assert!(state.error().unwrap().starts_with("Search error occurred."));
    }

    #[test]
    fn test_select_cluster_requests_page_zero() {
        let mut state = ExplorerState::new();
        let (_, cluster_id, page, limit, offset) = page_command(&state.select_cluster(7));
        assert_eq!((cluster_id, page, limit, offset), (7, 0, PAGE_SIZE, 0));

        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.pending_page, Some(0));
        assert!(browse.images.is_empty());
    }

    #[test]
    fn test_pagination_appends_until_total() {
        let mut state = ExplorerState::new();
        let (g0, ..) = page_command(&state.select_cluster(3));
        state.finish_cluster_page(g0, 3, 0, Ok(ClusterPage::new(images("c", 0..20), 42)));

        let (g1, _, page, _, offset) = page_command(&state.load_more().unwrap());
        assert_eq!((page, offset), (1, 20));
        assert!(state.load_more().is_none(), "load more while a page is pending");
        state.finish_cluster_page(g1, 3, 1, Ok(ClusterPage::new(images("c", 20..40), 42)));

        let (g2, _, page, _, offset) = page_command(&state.load_more().unwrap());
        assert_eq!((page, offset), (2, 40));
        state.finish_cluster_page(g2, 3, 2, Ok(ClusterPage::new(images("c", 40..42), 42)));

        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.images, images("c", 0..42));
        assert_eq!(browse.current_page, 2);
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_page_beyond_total_is_truncated() {
        let mut state = ExplorerState::new();
        let (g0, ..) = page_command(&state.select_cluster(1));
        state.finish_cluster_page(g0, 1, 0, Ok(ClusterPage::new(images("c", 0..20), 5)));

        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.images.len(), 5);
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_empty_page_stops_pagination() {
        let mut state = ExplorerState::new();
        let (g0, ..) = page_command(&state.select_cluster(1));
        state.finish_cluster_page(g0, 1, 0, Ok(ClusterPage::new(images("c", 0..20), 50)));
        let (g1, ..) = page_command(&state.load_more().unwrap());
        state.finish_cluster_page(g1, 1, 1, Ok(ClusterPage::new(vec![], 50)));

        assert_eq!(state.mode().as_browse().unwrap().total, 20);
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_page_for_previous_cluster_is_stale() {
        let mut state = ExplorerState::new();
        let (old, ..) = page_command(&state.select_cluster(1));
        let (new, ..) = page_command(&state.select_cluster(2));

        let outcome = state.finish_cluster_page(old, 1, 0, Ok(ClusterPage::new(images("one", 0..3), 3)));
        assert_eq!(outcome, ApplyOutcome::Stale);

        state.finish_cluster_page(new, 2, 0, Ok(ClusterPage::new(images("two", 0..2), 2)));
        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.cluster_id, 2);
        assert_eq!(browse.images, images("two", 0..2));
    }

    #[test]
    fn test_page_failure_keeps_earlier_pages() {
        let mut state = ExplorerState::new();
        let (g0, ..) = page_command(&state.select_cluster(9));
        state.finish_cluster_page(g0, 9, 0, Ok(ClusterPage::new(images("c", 0..20), 30)));
        let (g1, ..) = page_command(&state.load_more().unwrap());
        state.finish_cluster_page(g1, 9, 1, Err(ApiError::Network("reset".into())));

        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.images.len(), 20);
        assert_eq!(browse.current_page, 0);
        assert!(browse.pending_page.is_none());
        assert!(state.error().unwrap().starts_with("Failed to load images for cluster 9."));

        // Retrying is allowed after a failure.
        assert!(state.load_more().is_some());
    }

    #[test]
    fn test_search_after_select_discards_page() {
        let mut state = ExplorerState::new();
        let (g0, ..) = page_command(&state.select_cluster(4));
        state.submit_search("dogs", &FilterDraft::default()).unwrap();

        let outcome = state.finish_cluster_page(g0, 4, 0, Ok(ClusterPage::new(images("c", 0..3), 3)));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(state.mode().as_search().is_some());
    }

    #[test]
    fn test_select_after_search_discards_search() {
        let mut state = ExplorerState::new();
        let g = search_generation(&state.submit_search("dogs", &FilterDraft::default()).unwrap());
        state.select_cluster(4);

        assert_eq!(state.finish_search(g, Ok(images("s", 0..3))), ApplyOutcome::Stale);
        assert!(state.mode().as_browse().is_some());
    }

    #[test]
    fn test_show_all_clusters_keeps_list_and_issues_nothing() {
        let mut state = ExplorerState::new();
        let load = state.load_clusters();
        state.finish_clusters(load.generation(), Ok(vec![Cluster::new(1, 2, "")]));
        let (g0, ..) = page_command(&state.select_cluster(1));
        state.error = Some("old".to_string());

        state.show_all_clusters();
        assert_eq!(state.mode(), &ViewMode::Overview);
        assert_eq!(state.clusters().len(), 1);
        assert!(state.error().is_none());
        assert_eq!(
            state.finish_cluster_page(g0, 1, 0, Ok(ClusterPage::new(vec![], 0))),
            ApplyOutcome::Stale
        );
    }

    #[test]
    fn test_load_more_outside_browse_is_noop() {
        let mut state = ExplorerState::new();
        assert!(state.load_more().is_none());
        assert!(state.load_cluster_page(1).is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = ExplorerState::new();
        let load = state.load_clusters();
        state.finish_clusters(load.generation(), Err(ApiError::Network("x".into())));
        state.dismiss_error();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_load_more_at_total_leaves_state_untouched() {
        let mut state = ExplorerState::new();
        let (g, ..) = page_command(&state.select_cluster(2));
        state.finish_cluster_page(g, 2, 0, Ok(ClusterPage::new(images("c", 0..20), 20)));
        state.error = Some("earlier failure".to_string());

        let mode_before = state.mode().clone();
        let error_before = state.error().map(str::to_string);

        assert!(state.load_more().is_none());
        assert_eq!(state.mode(), &mode_before);
        assert_eq!(state.error().map(str::to_string), error_before);
    }

    #[test]
    fn test_select_cluster_from_applied_search_results() {
        let mut state = ExplorerState::new();
        let search = state
            .submit_search("cats", &FilterDraft::default())
            .unwrap();
        assert_eq!(
            state.finish_search(search_generation(&search), Ok(images("s", 0..3))),
            ApplyOutcome::Applied
        );
        assert_eq!(state.images().len(), 3);

        let (g, cluster_id, page, _, offset) = page_command(&state.select_cluster(7));
        assert_eq!((cluster_id, page, offset), (7, 0, 0));

        let browse = state.mode().as_browse().unwrap();
        assert_eq!(browse.cluster_id, 7);
        assert!(browse.images.is_empty());
        assert!(state.mode().as_search().is_none());

        assert_eq!(
            state.finish_cluster_page(g, 7, 0, Ok(ClusterPage::new(images("c", 0..2), 2))),
            ApplyOutcome::Applied
        );
        assert_eq!(state.images(), images("c", 0..2).as_slice());
    }
}
