//! Grid and list views of the entries in the current folder.

use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use clouddeck_core::{EntryKind, FileEntry};

use crate::app::constants::{GRID_CELL_HEIGHT, GRID_CELL_WIDTH};
use crate::theme::{Theme, kind_glyph};
use crate::ui::{center, truncate};

/// Number of grid columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    (width / GRID_CELL_WIDTH).max(1) as usize
}

/// Size column text: the size for files, the item count for folders.
fn meta_label(entry: &FileEntry) -> String {
    if entry.is_folder() {
        if !entry.is_loaded() {
            return "…".to_string();
        }
        return match entry.child_count() {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        };
    }
    entry.size_label().unwrap_or_else(|| "-".to_string())
}

/// Entries laid out as cards.
pub struct EntryGrid<'a> {
    theme: &'a Theme,
    entries: &'a [&'a FileEntry],
    selected: Option<usize>,
    offset_rows: usize,
    now: DateTime<Utc>,
}

impl<'a> EntryGrid<'a> {
    /// Create a grid over `entries`.
    pub fn new(theme: &'a Theme, entries: &'a [&'a FileEntry], now: DateTime<Utc>) -> Self {
        Self {
            theme,
            entries,
            selected: None,
            offset_rows: 0,
            now,
        }
    }

    /// Highlight one entry.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// First card row to draw.
    pub fn offset(mut self, rows: usize) -> Self {
        self.offset_rows = rows;
        self
    }

    /// Number of card rows that fit in `area`.
    pub fn visible_rows(area: Rect) -> usize {
        (area.height / GRID_CELL_HEIGHT).max(1) as usize
    }

    fn render_card(&self, entry: &FileEntry, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected {
            self.theme.focused_border
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width == 0 {
            return;
        }
        let width = inner.width as usize;
        let kind = entry.kind();

        let name_style = if selected {
            self.theme.selected
        } else {
            Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::BOLD)
        };
        let muted = Style::default().fg(self.theme.muted);

        let lines = [
            Line::styled(center(kind_glyph(kind), width), self.theme.kind_style(kind)),
            Line::styled(center(&entry.name, width), name_style),
            Line::styled(center(&meta_label(entry), width), muted),
            Line::styled(center(&entry.modified.describe(self.now), width), muted),
        ];
        for (row, line) in lines.iter().enumerate() {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}

impl Widget for EntryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = grid_columns(area.width);
        let cell_width = GRID_CELL_WIDTH.min(area.width);
        let rows = Self::visible_rows(area);
        let first = self.offset_rows * columns;

        for (slot, entry) in self.entries.iter().skip(first).take(rows * columns).enumerate() {
            let col = (slot % columns) as u16;
            let row = (slot / columns) as u16;
            let y = area.y + row * GRID_CELL_HEIGHT;
            let height = GRID_CELL_HEIGHT.min(area.y + area.height - y);
            let cell = Rect::new(area.x + col * cell_width, y, cell_width, height);

            let index = first + slot;
            self.render_card(entry, self.selected == Some(index), cell, buf);
        }
    }
}

/// Entries laid out as table rows under a header.
pub struct EntryList<'a> {
    theme: &'a Theme,
    entries: &'a [&'a FileEntry],
    selected: Option<usize>,
    offset: usize,
    now: DateTime<Utc>,
}

impl<'a> EntryList<'a> {
    /// Create a list over `entries`.
    pub fn new(theme: &'a Theme, entries: &'a [&'a FileEntry], now: DateTime<Utc>) -> Self {
        Self {
            theme,
            entries,
            selected: None,
            offset: 0,
            now,
        }
    }

    /// Highlight one entry.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// First row to draw.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Number of entry rows that fit in `area` below the header.
    pub fn visible_rows(area: Rect) -> usize {
        area.height.saturating_sub(1).max(1) as usize
    }
}

/// One list row: name padded to `name_w`, size right-aligned in `size_w`.
fn list_row(name: &str, size: &str, modified: &str, name_w: usize, size_w: usize) -> String {
    format!(
        "{:<name_w$} {:>size_w$}  {}",
        truncate(name, name_w),
        size,
        modified,
    )
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height == 0 {
            return;
        }

        // Icon column, then name, size and modified columns
        let size_w = 10;
        let modified_w = 16;
        let name_w = (area.width as usize)
            .saturating_sub(4 + size_w + 2 + modified_w + 1)
            .max(8);

        let header = list_row("Name", "Size", "Modified", name_w, size_w);
        buf.set_line(
            area.x,
            area.y,
            &Line::from(vec![
                Span::raw("    "),
                Span::styled(header, self.theme.title),
            ]),
            area.width,
        );

        let rows = Self::visible_rows(area);
        for (slot, entry) in self.entries.iter().skip(self.offset).take(rows).enumerate() {
            let index = self.offset + slot;
            let y = area.y + 1 + slot as u16;
            if y >= area.y + area.height {
                break;
            }

            let selected = self.selected == Some(index);
            let row_style = if selected {
                self.theme.selected
            } else {
                Style::default().fg(self.theme.foreground)
            };
            if selected {
                buf.set_style(Rect::new(area.x, y, area.width, 1), row_style);
            }

            let kind = entry.kind();
            let text = list_row(
                &entry.name,
                &meta_label(entry),
                &entry.modified.describe(self.now),
                name_w,
                size_w,
            );
            let line = Line::from(vec![
                Span::raw(if selected { " ▸ " } else { "   " }),
                Span::styled(kind_glyph(kind), self.theme.kind_style(kind)),
                Span::styled(" ", row_style),
                Span::styled(text, row_style),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

/// Placeholder shown when the current folder has nothing to display.
pub struct EmptyState<'a> {
    theme: &'a Theme,
    searching: bool,
}

impl<'a> EmptyState<'a> {
    /// Create the placeholder; `searching` selects the hint text.
    pub fn new(theme: &'a Theme, searching: bool) -> Self {
        Self { theme, searching }
    }

    /// Hint below the title.
    pub fn hint(searching: bool) -> &'static str {
        if searching {
            "Try adjusting your search terms"
        } else {
            "This folder is empty"
        }
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width == 0 {
            return;
        }

        let width = area.width as usize;
        let y = area.y + area.height / 2 - 1;
        let lines = [
            Line::styled(
                center(kind_glyph(EntryKind::Folder), width),
                self.theme.kind_style(EntryKind::Folder),
            ),
            Line::styled(
                center("No files found", width),
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                center(Self::hint(self.searching), width),
                Style::default().fg(self.theme.muted),
            ),
        ];
        for (row, line) in lines.iter().enumerate() {
            buf.set_line(area.x, y + row as u16, line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clouddeck_core::{FileKind, Modified};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn entries() -> Vec<FileEntry> {
        vec![
            FileEntry::folder("1", "Documents", Modified::relative("2 days ago"), vec![]),
            FileEntry::file(
                "2",
                "Resume.pdf",
                FileKind::Document,
                Some(245_000),
                Modified::relative("1 week ago"),
            ),
            FileEntry::file(
                "3",
                "song.mp3",
                FileKind::Audio,
                Some(3_400_000),
                Modified::relative("3 days ago"),
            ),
        ]
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(GRID_CELL_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn test_grid_renders_cards() {
        let theme = Theme::dark();
        let owned = entries();
        let refs: Vec<&FileEntry> = owned.iter().collect();
        let area = Rect::new(0, 0, GRID_CELL_WIDTH * 2, GRID_CELL_HEIGHT * 2);
        let mut buf = Buffer::empty(area);
        EntryGrid::new(&theme, &refs, Utc::now())
            .selected(Some(1))
            .render(area, &mut buf);

        // Two cards on the first row, the third below
        assert!(row_text(&buf, 2).contains("Documents"));
        assert!(row_text(&buf, 2).contains("Resume.pdf"));
        assert!(row_text(&buf, 3).contains("0 items"));
        assert!(row_text(&buf, GRID_CELL_HEIGHT + 2).contains("song.mp3"));
        assert!(row_text(&buf, 4).contains("2 days ago"));
    }

    #[test]
    fn test_list_renders_rows() {
        let theme = Theme::dark();
        let owned = entries();
        let refs: Vec<&FileEntry> = owned.iter().collect();
        let area = Rect::new(0, 0, 70, 6);
        let mut buf = Buffer::empty(area);
        EntryList::new(&theme, &refs, Utc::now())
            .selected(Some(0))
            .offset(1)
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Name"));
        assert!(row_text(&buf, 1).contains("Resume.pdf"));
        assert!(row_text(&buf, 1).contains("1 week ago"));
        assert!(!row_text(&buf, 1).contains('▸'));
        assert!(row_text(&buf, 2).contains("song.mp3"));
    }

    #[test]
    fn test_empty_state_hint() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 6);

        let mut buf = Buffer::empty(area);
        EmptyState::new(&theme, true).render(area, &mut buf);
        let text: String = (0..6).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("No files found"));
        assert!(text.contains("Try adjusting your search terms"));

        let mut buf = Buffer::empty(area);
        EmptyState::new(&theme, false).render(area, &mut buf);
        let text: String = (0..6).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("This folder is empty"));
    }
}
