//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage};
use crate::state::ApplyOutcome;

impl App {
    /// Apply the result of a spawned API call.
    pub fn handle_message(&mut self, msg: AppMessage) {
        let generation = msg.generation();
        let outcome = match msg {
            AppMessage::ClustersLoaded { generation, result } => {
                self.explorer.finish_clusters(generation, result)
            }
            AppMessage::SearchCompleted { generation, result } => {
                self.explorer.finish_search(generation, result)
            }
            AppMessage::ClusterPageLoaded {
                generation,
                cluster_id,
                page,
                result,
            } => self
                .explorer
                .finish_cluster_page(generation, cluster_id, page, result),
        };

        match outcome {
            ApplyOutcome::Applied => {
                self.clamp_selection();
                self.mark_dirty();
            }
            ApplyOutcome::Stale => debug!(%generation, "stale message ignored"),
        }
    }
}
