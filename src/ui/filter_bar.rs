//! Filter bar: query, city, month and year fields.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::tail_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS};
use crate::app::{App, Focus};

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, hint: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(COLOR_FOCUS)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", label), border_style));

    let width = area.width.saturating_sub(3) as usize;
    let content = if value.is_empty() && !focused {
        Span::styled(hint.to_string(), Style::default().fg(COLOR_DIM))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Span::styled(
            format!("{}{}", tail_to_width(value, width), cursor),
            Style::default().fg(COLOR_ACCENT),
        )
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

pub fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Query
            Constraint::Length(20), // City
            Constraint::Length(16), // Month
            Constraint::Length(10), // Year
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        Focus::Query.label(),
        &app.query,
        "Search images...",
        app.focus == Focus::Query,
    );
    render_field(
        frame,
        chunks[1],
        Focus::City.label(),
        &app.filters.city,
        "Any city",
        app.focus == Focus::City,
    );

    let month_focused = app.focus == Focus::Month;
    let month = if month_focused {
        format!("‹ {} ›", app.filters.month_label())
    } else {
        app.filters.month_label().to_string()
    };
    render_field(frame, chunks[2], Focus::Month.label(), &month, "", month_focused);

    render_field(
        frame,
        chunks[3],
        Focus::Year.label(),
        &app.filters.year,
        "Any",
        app.focus == Focus::Year,
    );
}
