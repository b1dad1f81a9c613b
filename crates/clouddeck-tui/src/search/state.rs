//! Search box state.

use clouddeck_core::SearchQuery;

/// State of the search box above the file list.
///
/// The query keeps filtering the current folder after the box loses
/// focus; it is cleared explicitly with Esc.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Whether the search box has keyboard focus.
    pub active: bool,
    /// Cursor position in characters.
    cursor: usize,
    /// Prepared query, rebuilt on every edit.
    query: SearchQuery,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the search box, keeping the current query.
    pub fn activate(&mut self) {
        self.active = true;
        self.cursor = self.char_len();
    }

    /// Leave the search box, keeping the filter applied.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// The query as typed.
    pub fn text(&self) -> &str {
        self.query.as_str()
    }

    /// The prepared query used for filtering.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Check if a filter is applied.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the query and move the cursor to the end.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.text().to_string();
        text.insert(self.byte_offset(self.cursor), c);
        self.query = SearchQuery::new(text);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at(self.cursor);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.char_len() {
            self.remove_at(self.cursor);
        }
    }

    /// Move cursor left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Move cursor to start.
    pub fn move_cursor_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the query.
    pub fn clear(&mut self) {
        self.query = SearchQuery::default();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text()
            .char_indices()
            .nth(char_index)
            .map_or(self.text().len(), |(i, _)| i)
    }

    fn remove_at(&mut self, char_index: usize) {
        let mut text = self.text().to_string();
        text.remove(self.byte_offset(char_index));
        self.query = SearchQuery::new(text);
    }
}
