//! Grid selection movement.

use super::App;

impl App {
    /// Move the selection by `dx` tiles horizontally and `dy` rows
    /// vertically, stopping at the edges of the grid.
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let count = self.tile_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let columns = self.grid_columns.max(1) as isize;
        let target = self.selected as isize + dx + dy * columns;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.tile_count().saturating_sub(1);
    }

    /// Keep the selection inside the current tile list.
    pub fn clamp_selection(&mut self) {
        let count = self.tile_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
