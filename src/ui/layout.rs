//! Tile grid geometry.
//!
//! Tiles have a fixed height and a minimum width; the grid fits as many
//! columns as the area allows and stretches tiles to fill the row. Rows
//! scroll so the selected tile is always visible.

use ratatui::layout::Rect;

/// Narrowest a tile may be, borders included.
pub const MIN_TILE_WIDTH: u16 = 26;

/// Tile height, borders included.
pub const TILE_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub visible_rows: usize,
    pub tile_width: u16,
}

impl GridLayout {
    /// Fit a grid into `area`.
    pub fn fit(area: Rect) -> Self {
        let columns = (area.width / MIN_TILE_WIDTH).max(1);
        let tile_width = area.width / columns;
        let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;
        Self {
            columns: columns as usize,
            visible_rows,
            tile_width,
        }
    }

    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// First row to draw so that `selected` is on screen.
    pub fn first_visible_row(&self, selected: usize) -> usize {
        let selected_row = selected / self.columns;
        (selected_row + 1).saturating_sub(self.visible_rows)
    }

    /// Screen rect of tile `index`, given the first visible row.
    pub fn tile_rect(&self, area: Rect, index: usize, first_row: usize) -> Option<Rect> {
        let row = index / self.columns;
        let col = index % self.columns;
        if row < first_row || row >= first_row + self.visible_rows {
            return None;
        }
        let y = area.y + ((row - first_row) as u16) * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            return None;
        }
        Some(Rect {
            x: area.x + (col as u16) * self.tile_width,
            y,
            width: self.tile_width,
            height: TILE_HEIGHT,
        })
    }
}
