//! Explorer state management
//!
//! - [`ExplorerState`]: the view state machine (cluster list, mode, error slot)
//! - [`ViewMode`]: which display mode is active, with its per-mode data
//! - [`Command`]: remote calls requested by transitions
//! - [`RequestSequencer`]: generation tokens that discard superseded responses

mod command;
mod explorer;
mod sequencer;
mod view_mode;

pub use command::Command;
pub use explorer::{ExplorerState, CLUSTERS_ERROR, PAGE_SIZE};
pub use sequencer::{ApplyOutcome, Generation, RequestSequencer};
pub use view_mode::{ClusterBrowse, SearchResults, ViewMode};
