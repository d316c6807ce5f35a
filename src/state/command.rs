//! Side effects requested by state transitions.

use super::Generation;
use crate::models::SearchFilters;

/// A remote call the runtime must perform.
///
/// The generation travels with the call and comes back with its result so
/// the explorer can tell whether the result is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchClusters {
        generation: Generation,
    },
    Search {
        generation: Generation,
        filters: SearchFilters,
    },
    FetchClusterPage {
        generation: Generation,
        cluster_id: i64,
        page: usize,
        limit: usize,
        offset: usize,
    },
}

impl Command {
    pub fn generation(&self) -> Generation {
        match self {
            Command::FetchClusters { generation }
            | Command::Search { generation, .. }
            | Command::FetchClusterPage { generation, .. } => *generation,
        }
    }
}
