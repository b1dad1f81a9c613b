//! Sidebar with the New button, drive sections and storage usage.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use strum::IntoEnumIterator;

use clouddeck_core::StorageQuota;

use crate::app::state::SidebarSection;
use crate::theme::Theme;
use crate::ui::QuotaBar;

/// Left-hand navigation pane.
pub struct Sidebar<'a> {
    theme: &'a Theme,
    quota: &'a StorageQuota,
    section: SidebarSection,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a sidebar highlighting `section`.
    pub fn new(theme: &'a Theme, quota: &'a StorageQuota, section: SidebarSection) -> Self {
        Self {
            theme,
            quota,
            section,
            focused: false,
        }
    }

    /// Mark the sidebar as holding keyboard focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width - 2;
        let bottom = inner.y + inner.height;
        let mut y = inner.y + 1;

        // Primary action
        if y < bottom {
            let button = Line::from(Span::styled(" + New ", self.theme.button));
            buf.set_line(x, y, &button, width);
            y += 2;
        }

        for section in SidebarSection::iter() {
            if y >= bottom {
                break;
            }
            let active = section == self.section;
            let marker = if active { "▸ " } else { "  " };
            let style = match (active, self.focused) {
                (true, true) => self.theme.selected,
                (true, false) => Style::default()
                    .fg(self.theme.info)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().fg(self.theme.foreground),
            };
            let line = Line::from(Span::styled(format!("{marker}{section}"), style));
            buf.set_line(x, y, &line, width);
            y += 1;
        }

        // Storage block pinned to the bottom
        if inner.height >= 12 {
            let storage_y = bottom - 4;
            buf.set_line(
                x,
                storage_y,
                &Line::styled("Storage", Style::default().fg(self.theme.muted)),
                width,
            );
            QuotaBar::for_quota(self.quota)
                .filled_style(self.theme.quota_bar)
                .empty_style(self.theme.quota_bg)
                .render(Rect::new(x, storage_y + 1, width, 1), buf);
            buf.set_line(
                x,
                storage_y + 2,
                &Line::styled(self.quota.describe(), Style::default().fg(self.theme.muted)),
                width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_sidebar_lists_sections_and_quota() {
        let theme = Theme::dark();
        let quota = StorageQuota::default();
        let area = Rect::new(0, 0, 26, 20);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&theme, &quota, SidebarSection::MyDrive).render(area, &mut buf);

        let text: Vec<String> = (0..20).map(|y| row_text(&buf, y)).collect();
        assert!(text[1].contains("+ New"));
        assert!(text[3].contains("▸ My Drive"));
        assert!(text[4].contains("Shared with me"));
        assert!(text.iter().any(|row| row.contains(&quota.describe())));
    }
}
