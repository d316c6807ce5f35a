//! Header: app title and where the user is.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::state::ViewMode;

/// Breadcrumb for the current mode.
pub fn breadcrumb(mode: &ViewMode) -> String {
    match mode {
        ViewMode::Overview => "All clusters".to_string(),
        ViewMode::SearchResults(results) => format!("Search: \"{}\"", results.filters.query),
        ViewMode::ClusterBrowse(browse) => format!("All clusters › Cluster {}", browse.cluster_id),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            "Explore Pixora",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  ", Style::default().fg(COLOR_DIM)),
        Span::styled(breadcrumb(app.explorer.mode()), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
