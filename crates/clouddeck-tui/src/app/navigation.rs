//! Selection movement over the file area.
//!
//! The grid and the list share one flat selection index. In the grid,
//! vertical moves step by a whole row of cards.

use super::constants::PAGE_SIZE;

/// Trait for types that support list-style navigation.
pub trait ListNavigator {
    /// Get the currently selected index.
    fn selected(&self) -> usize;

    /// Set the selected index.
    fn set_selected(&mut self, index: usize);

    /// Get the maximum valid index (item count - 1, or 0 if empty).
    fn max_index(&self) -> usize;

    /// Move selection up by count items.
    fn move_up(&mut self, count: usize) {
        let current = self.selected();
        self.set_selected(current.saturating_sub(count));
    }

    /// Move selection down by count items.
    fn move_down(&mut self, count: usize) {
        let current = self.selected();
        let max = self.max_index();
        self.set_selected((current + count).min(max));
    }

    /// Move selection up by one page.
    fn page_up(&mut self) {
        self.move_up(PAGE_SIZE);
    }

    /// Move selection down by one page.
    fn page_down(&mut self) {
        self.move_down(PAGE_SIZE);
    }

    /// Jump to the first item.
    fn jump_to_top(&mut self) {
        self.set_selected(0);
    }

    /// Jump to the last item.
    fn jump_to_bottom(&mut self) {
        self.set_selected(self.max_index());
    }
}

/// Navigator over the visible entries, laid out in `columns` columns.
///
/// The list view is a grid with one column.
#[derive(Debug)]
pub struct GridNav<'a> {
    selected: &'a mut usize,
    count: usize,
    columns: usize,
}

impl<'a> GridNav<'a> {
    /// Create a navigator over `count` entries.
    pub fn new(selected: &'a mut usize, count: usize, columns: usize) -> Self {
        Self {
            selected,
            count,
            columns: columns.max(1),
        }
    }

    /// Move one row up.
    pub fn row_up(&mut self) {
        if *self.selected >= self.columns {
            self.move_up(self.columns);
        }
    }

    /// Move one row down, landing on the last entry of a short last row.
    pub fn row_down(&mut self) {
        let row = *self.selected / self.columns;
        let last_row = self.max_index() / self.columns;
        if row < last_row {
            self.move_down(self.columns);
        }
    }

    /// Move one card left, not wrapping across rows.
    pub fn left(&mut self) {
        if *self.selected % self.columns > 0 {
            self.move_up(1);
        }
    }

    /// Move one card right, not wrapping across rows.
    pub fn right(&mut self) {
        if *self.selected % self.columns + 1 < self.columns {
            self.move_down(1);
        }
    }
}

impl ListNavigator for GridNav<'_> {
    fn selected(&self) -> usize {
        *self.selected
    }

    fn set_selected(&mut self, index: usize) {
        *self.selected = index.min(self.max_index());
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_nav() {
        let mut selected = 0;
        let mut nav = GridNav::new(&mut selected, 10, 1);
        nav.move_down(3);
        assert_eq!(nav.selected(), 3);

        nav.row_up();
        assert_eq!(nav.selected(), 2);

        nav.jump_to_bottom();
        assert_eq!(nav.selected(), 9);

        nav.jump_to_top();
        assert_eq!(nav.selected(), 0);
    }

    #[test]
    fn test_grid_rows_and_columns() {
        // 3 columns, 7 entries:
        // 0 1 2
        // 3 4 5
        // 6
        let mut selected = 1;
        let mut nav = GridNav::new(&mut selected, 7, 3);

        nav.row_down();
        assert_eq!(nav.selected(), 4);
        nav.row_down();
        assert_eq!(nav.selected(), 6);
        nav.row_down();
        assert_eq!(nav.selected(), 6);

        nav.right();
        assert_eq!(nav.selected(), 6);
        nav.row_up();
        assert_eq!(nav.selected(), 3);
        nav.left();
        assert_eq!(nav.selected(), 3);
        nav.right();
        nav.right();
        assert_eq!(nav.selected(), 5);
        nav.right();
        assert_eq!(nav.selected(), 5);
    }

    #[test]
    fn test_nav_empty() {
        let mut selected = 0;
        let mut nav = GridNav::new(&mut selected, 0, 4);
        assert_eq!(nav.max_index(), 0);
        nav.row_down();
        nav.right();
        assert_eq!(nav.selected(), 0);
    }
}
