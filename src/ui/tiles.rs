//! Generic tile grid rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::layout::GridLayout;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_PLACEHOLDER};
use crate::locator::Resolved;

/// Display data for one grid tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: String,
    pub detail: String,
    pub image: Resolved,
}

impl Tile {
    /// Last line of the tile: the image URL, or a marker for placeholders.
    pub fn image_line(&self) -> String {
        match &self.image {
            Resolved::Url(url) => url.clone(),
            Resolved::Placeholder(_) => "[no image]".to_string(),
        }
    }
}

/// Draw `tiles` into `area`, highlighting `selected` when `focused`.
pub fn render_tiles(
    frame: &mut Frame,
    area: Rect,
    grid: &GridLayout,
    tiles: &[Tile],
    selected: usize,
    focused: bool,
) {
    let first_row = grid.first_visible_row(selected);

    for (index, tile) in tiles.iter().enumerate() {
        let Some(rect) = grid.tile_rect(area, index, first_row) else {
            continue;
        };
        let is_selected = index == selected;
        let border_style = if is_selected && focused {
            Style::default().fg(COLOR_FOCUS)
        } else if is_selected {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_BORDER)
        };

        let inner_width = rect.width.saturating_sub(2) as usize;
        let title_style = if is_selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let image_style = if tile.image.is_placeholder() {
            Style::default().fg(COLOR_PLACEHOLDER)
        } else {
            Style::default().fg(COLOR_DIM)
        };

        let lines = vec![
            Line::from(Span::styled(truncate_to_width(&tile.title, inner_width), title_style)),
            Line::from(Span::styled(
                truncate_to_width(&tile.detail, inner_width),
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(Span::styled(truncate_to_width(&tile.image_line(), inner_width), image_style)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if is_selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style);
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
