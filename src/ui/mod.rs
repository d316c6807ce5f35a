//! UI rendering for Pixora
//!
//! Renders the explorer screen top to bottom:
//! - Header with the title and a breadcrumb for the current mode
//! - Filter bar (query, city, month, year)
//! - Error banner, only while the error slot is set
//! - Mode content: cluster tiles, search results or a cluster's images
//! - Footer with key hints
//!
//! Tile construction (`cluster_tiles`, `image_tiles`) is separate from
//! drawing so the mapping can be tested without a terminal.

mod cluster_grid;
mod error_banner;
mod filter_bar;
mod footer;
mod header;
mod helpers;
mod image_grid;
mod layout;
mod theme;
mod tiles;

pub use cluster_grid::cluster_tiles;
pub use footer::key_hints;
pub use header::breadcrumb;
pub use helpers::{truncate_to_width, SPINNER_FRAMES};
pub use image_grid::{image_tiles, NO_CLUSTER_IMAGES, NO_SEARCH_RESULTS};
pub use layout::{GridLayout, MIN_TILE_WIDTH, TILE_HEIGHT};
pub use tiles::Tile;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::state::ViewMode;
use cluster_grid::render_cluster_grid;
use error_banner::{banner_height, render_error_banner};
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use helpers::inner_rect;
use image_grid::render_image_grid;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen. Records the grid's column count on `app` so
/// selection movement matches what is drawn.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = inner_rect(frame.area(), 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Filter bar
            Constraint::Length(banner_height(app.explorer.error())),
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_filter_bar(frame, chunks[1], app);
    if let Some(error) = app.explorer.error() {
        render_error_banner(frame, chunks[2], error);
    }

    if matches!(app.explorer.mode(), ViewMode::Overview) {
        render_cluster_grid(frame, chunks[3], app);
    } else {
        render_image_grid(frame, chunks[3], app);
    }

    render_footer(frame, chunks[4], app);
}
