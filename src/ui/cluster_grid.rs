//! Overview: the cluster list as tiles.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner;
use super::layout::GridLayout;
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER};
use super::tiles::{render_tiles, Tile};
use crate::app::{App, Focus};
use crate::locator::{Placeholder, Resolved};
use crate::models::Cluster;

/// Map clusters to tiles. `resolve` turns a thumbnail locator into a URL.
pub fn cluster_tiles<F>(clusters: &[Cluster], resolve: F) -> Vec<Tile>
where
    F: Fn(&str, Placeholder) -> Resolved,
{
    clusters
        .iter()
        .map(|cluster| Tile {
            title: format!("Cluster {}", cluster.id),
            detail: format!("{} images", cluster.count),
            image: resolve(&cluster.thumbnail, Placeholder::Thumbnail),
        })
        .collect()
}

pub fn render_cluster_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Section title
            Constraint::Min(1),    // Grid
        ])
        .split(area);

    let mut title = vec![Span::styled(
        "Discover by Topic",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if app.explorer.is_loading_clusters() {
        title.push(Span::styled(
            format!("  {} Loading clusters...", spinner(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    let grid = GridLayout::fit(chunks[1]);
    app.grid_columns = grid.columns;

    let clusters = app.explorer.clusters();
    if clusters.is_empty() {
        if !app.explorer.is_loading_clusters() {
            frame.render_widget(
                Paragraph::new(Span::styled("No clusters found.", Style::default().fg(COLOR_DIM))),
                chunks[1],
            );
        }
        return;
    }

    let tiles = cluster_tiles(clusters, |raw, fallback| app.resolve_locator(raw, fallback));
    render_tiles(
        frame,
        chunks[1],
        &grid,
        &tiles,
        app.selected,
        app.focus == Focus::Results,
    );
}
