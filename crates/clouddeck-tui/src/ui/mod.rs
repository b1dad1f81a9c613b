//! UI components and widgets.

mod breadcrumb;
mod entries;
mod help;
pub mod modals;
mod quota_bar;
mod sidebar;

pub use breadcrumb::BreadcrumbBar;
pub use entries::{EmptyState, EntryGrid, EntryList, grid_columns};
pub use help::HelpOverlay;
pub use quota_bar::QuotaBar;
pub use sidebar::Sidebar;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub breadcrumb: Rect,
    pub toolbar: Rect,
    pub files: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let min_main_width = 40;
        let sidebar_width = 26;

        // Vertical split: header, content, footer
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        // Sidebar only when there is room for it
        let (sidebar, main) = if area.width >= min_main_width + sidebar_width {
            let [sidebar, main] = Layout::horizontal([
                Constraint::Length(sidebar_width),
                Constraint::Min(min_main_width),
            ])
            .areas(content);
            (Some(sidebar), main)
        } else {
            (None, content)
        };

        let [breadcrumb, toolbar, files] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(main);

        Self {
            header,
            sidebar,
            breadcrumb,
            toolbar,
            files,
            footer,
        }
    }
}

/// Truncate a string to a display width, ending with `…` when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pad a string on both sides to center it in `width` columns.
pub fn center(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let pad = width.saturating_sub(s.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Centered popup area of at most `width` x `height` inside `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));

    let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Resume.pdf", 20), "Resume.pdf");
        assert_eq!(truncate("Project Proposal.docx", 10), "Project P…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("日本語ファイル", 5).width(), 5);
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
    }

    #[test]
    fn test_layout_hides_sidebar_when_narrow() {
        let wide = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert!(wide.sidebar.is_some());
        assert_eq!(wide.header.height, 1);
        assert_eq!(wide.footer.y, 39);

        let narrow = AppLayout::new(Rect::new(0, 0, 50, 40));
        assert!(narrow.sidebar.is_none());
        assert_eq!(narrow.files.width, 50);
    }
}
