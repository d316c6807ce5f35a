//! Inline error banner for the single error slot.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR};

/// Rows the banner needs; zero when there is no error.
pub fn banner_height(error: Option<&str>) -> u16 {
    if error.is_some() {
        3
    } else {
        0
    }
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_ERROR));

    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD)),
        Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
        Span::styled("  [Esc] dismiss", Style::default().fg(COLOR_DIM)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
