//! User actions and command execution.

use tracing::{debug, info, warn};

use super::{App, AppMessage, Focus};
use crate::state::{Command, ViewMode};
use crate::traits::ImageApi;

/// Run one command against the API and wrap the result for the main loop.
pub async fn execute(api: &dyn ImageApi, command: Command) -> AppMessage {
    match command {
        Command::FetchClusters { generation } => AppMessage::ClustersLoaded {
            generation,
            result: api.fetch_clusters().await,
        },
        Command::Search {
            generation,
            filters,
        } => AppMessage::SearchCompleted {
            generation,
            result: api.search_images(&filters).await,
        },
        Command::FetchClusterPage {
            generation,
            cluster_id,
            page,
            limit,
            offset,
        } => AppMessage::ClusterPageLoaded {
            generation,
            cluster_id,
            page,
            result: api.fetch_cluster_images(cluster_id, limit, offset).await,
        },
    }
}

impl App {
    /// Spawn `command` on the runtime. The result arrives as an [`AppMessage`].
    pub fn dispatch(&self, command: Command) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = execute(api.as_ref(), command).await;
            if tx.send(message).is_err() {
                debug!("app closed before response was delivered");
            }
        });
    }

    /// Commit the query and filters as a new search.
    pub fn submit_search(&mut self) {
        let Some(command) = self.explorer.submit_search(&self.query, &self.filters) else {
            self.status_note = Some("Type something to search.".to_string());
            return;
        };
        self.remember_overview_selection();
        self.selected = 0;
        self.focus = Focus::Results;
        self.dispatch(command);
    }

    /// Browse the cluster under the cursor.
    pub fn select_cluster(&mut self, cluster_id: i64) {
        self.remember_overview_selection();
        let command = self.explorer.select_cluster(cluster_id);
        self.selected = 0;
        self.dispatch(command);
    }

    pub fn load_more(&mut self) {
        match self.explorer.load_more() {
            Some(command) => self.dispatch(command),
            None => debug!(mode = self.explorer.mode().name(), "load more ignored"),
        }
    }

    /// Re-request the cluster list from the overview.
    pub fn reload_clusters(&mut self) {
        let command = self.explorer.load_clusters();
        self.dispatch(command);
    }

    /// Leave search results or cluster browsing.
    pub fn show_all_clusters(&mut self) {
        let was_overview = matches!(self.explorer.mode(), ViewMode::Overview);
        self.explorer.show_all_clusters();
        if !was_overview {
            self.selected = self
                .overview_selected
                .min(self.explorer.clusters().len().saturating_sub(1));
        }
    }

    fn remember_overview_selection(&mut self) {
        if matches!(self.explorer.mode(), ViewMode::Overview) {
            self.overview_selected = self.selected;
        }
    }

    /// Activate the selected tile: open a cluster, or open an image.
    pub fn activate_selected(&mut self) {
        if !matches!(self.explorer.mode(), ViewMode::Overview) {
            self.open_selected();
            return;
        }
        if let Some(id) = self.explorer.clusters().get(self.selected).map(|c| c.id) {
            self.select_cluster(id);
        }
    }

    /// Open the selected tile's image. A locator that fails to open is
    /// marked broken and shown as a placeholder from then on.
    pub fn open_selected(&mut self) {
        let Some((raw, fallback)) = self.selected_locator() else {
            return;
        };
        let raw = raw.to_string();
        let resolved = self.resolve_locator(&raw, fallback);
        if resolved.is_placeholder() {
            self.status_note = Some("No image available for this tile.".to_string());
            return;
        }

        match (self.open_handler)(resolved.as_str()) {
            Ok(()) => {
                info!(url = resolved.as_str(), "opened image");
                self.status_note = Some(format!("Opened {}", resolved.as_str()));
            }
            Err(err) => {
                warn!(error = %err, "failed to open image");
                self.broken_locators.insert(raw);
                self.status_note = Some("Image could not be opened.".to_string());
            }
        }
    }

    /// Copy the selected tile's resolved URL.
    pub fn copy_selected(&mut self) {
        let Some((raw, fallback)) = self.selected_locator() else {
            return;
        };
        let resolved = self.resolve_locator(raw, fallback);
        if resolved.is_placeholder() {
            self.status_note = Some("No image available for this tile.".to_string());
            return;
        }

        self.status_note = Some(match (self.copy_handler)(resolved.as_str()) {
            Ok(()) => "Copied image URL.".to_string(),
            Err(err) => {
                warn!(error = %err, "copy failed");
                format!("Copy failed: {}", err)
            }
        });
    }
}
