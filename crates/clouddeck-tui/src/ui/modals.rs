//! Modal dialog widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};
use strum::IntoEnumIterator;

use crate::app::state::{EntryAction, MenuState};
use crate::theme::Theme;
use crate::ui::{popup_area, truncate};

/// Per-entry action menu.
pub struct ActionMenu<'a> {
    theme: &'a Theme,
    menu: &'a MenuState,
}

impl<'a> ActionMenu<'a> {
    /// Create a menu widget for an open menu.
    pub fn new(theme: &'a Theme, menu: &'a MenuState) -> Self {
        Self { theme, menu }
    }
}

impl Widget for ActionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let actions: Vec<EntryAction> = EntryAction::iter().collect();
        let popup = popup_area(area, 34, actions.len() as u16 + 4);
        Clear.render(popup, buf);

        let title = format!(" {} ", truncate(&self.menu.entry_name, 28));
        let block = Block::default()
            .title(title)
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let bottom = inner.y + inner.height;
        for (index, action) in actions.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= bottom {
                break;
            }

            let selected = index == self.menu.selected;
            let base = if action.is_destructive() {
                Style::default().fg(self.theme.error)
            } else {
                Style::default().fg(self.theme.foreground)
            };
            let style = if selected {
                base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                base
            };
            let marker = if selected { "▸ " } else { "  " };
            let line = Line::from(Span::styled(format!("{marker}{action}"), style));
            buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(2));
        }

        let hint_y = bottom.saturating_sub(1);
        if hint_y > inner.y + actions.len() as u16 {
            let hint = Line::from(vec![
                Span::styled(" Enter ", self.theme.help_key),
                Span::styled("select ", self.theme.help_desc),
                Span::styled(" Esc ", self.theme.help_key),
                Span::styled("close", self.theme.help_desc),
            ]);
            buf.set_line(inner.x, hint_y, &hint, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clouddeck_core::EntryId;

    #[test]
    fn test_action_menu_lists_actions() {
        let theme = Theme::dark();
        let mut menu = MenuState::new(EntryId::new("4"), "Budget Spreadsheet.xlsx");
        menu.move_down();

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        ActionMenu::new(&theme, &menu).render(area, &mut buf);

        let text: String = (0..20)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Budget Spreadsheet.xlsx"));
        assert!(text.contains("Download"));
        assert!(text.contains("▸ Share"));
        assert!(text.contains("Move to trash"));
    }
}
