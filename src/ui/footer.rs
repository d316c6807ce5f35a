//! Footer: contextual key hints, or the latest status note.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::{App, Focus};
use crate::state::ViewMode;

/// Key hints as (key, action) pairs for the current focus and mode.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "focus")];
    match app.focus {
        Focus::Query | Focus::City | Focus::Year => hints.push(("Enter", "search")),
        Focus::Month => {
            hints.push(("←/→", "month"));
            hints.push(("Enter", "search"));
        }
        Focus::Results => {
            hints.push(("arrows", "move"));
            match app.explorer.mode() {
                ViewMode::Overview => {
                    hints.push(("Enter", "open cluster"));
                    hints.push(("r", "reload"));
                }
                ViewMode::SearchResults(_) => {
                    hints.push(("o", "open"));
                    hints.push(("y", "copy url"));
                }
                ViewMode::ClusterBrowse(browse) => {
                    hints.push(("o", "open"));
                    hints.push(("y", "copy url"));
                    if browse.has_more() {
                        hints.push(("m", "load more"));
                    }
                }
            }
            hints.push(("q", "quit"));
        }
    }
    if app.explorer.error().is_some() {
        hints.push(("Esc", "dismiss"));
    } else if !matches!(app.explorer.mode(), ViewMode::Overview) {
        hints.push(("Esc", "all clusters"));
    }
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(note) = &app.status_note {
        Line::from(Span::styled(note.clone(), Style::default().fg(COLOR_ACCENT)))
    } else {
        let mut spans = Vec::new();
        for (i, (key, action)) in key_hints(app).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
            }
            spans.push(Span::styled(format!("[{}]", key), Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}
