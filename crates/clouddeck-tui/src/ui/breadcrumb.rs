//! Breadcrumb bar for the current folder path.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use clouddeck_core::Crumb;

use crate::theme::Theme;

const SEPARATOR: &str = " › ";

/// Renders the path as `[1] My Drive › [2] Documents › Meeting Notes`.
///
/// Every segment but the last carries the digit that jumps to it.
pub struct BreadcrumbBar<'a> {
    theme: &'a Theme,
    path: &'a [Crumb],
}

impl<'a> BreadcrumbBar<'a> {
    /// Create a bar for a path, root first.
    pub fn new(theme: &'a Theme, path: &'a [Crumb]) -> Self {
        Self { theme, path }
    }

    /// Spans for the bar, without width handling.
    fn spans(&self) -> Vec<Span<'a>> {
        let last = self.path.len().saturating_sub(1);
        let mut spans = vec![Span::raw(" ")];

        for (index, crumb) in self.path.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, self.theme.help_desc));
            }
            if index == last {
                spans.push(Span::styled(crumb.name.as_str(), self.theme.crumb_current));
                continue;
            }
            if index < 9 {
                spans.push(Span::styled(format!("[{}] ", index + 1), self.theme.help_key));
            }
            spans.push(Span::styled(crumb.name.as_str(), self.theme.crumb));
        }
        spans
    }
}

impl Widget for BreadcrumbBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = self.spans();
        let line_width: usize = spans.iter().map(Span::width).sum();

        // Drop leading segments until the current folder fits
        if line_width > area.width as usize {
            let mut width = line_width;
            let mut cut = 1;
            while width + 2 > area.width as usize && cut < spans.len().saturating_sub(1) {
                width -= spans[cut].width();
                cut += 1;
            }
            if cut < spans.len() - 1 && spans[cut].content == SEPARATOR {
                cut += 1;
            }
            spans.drain(1..cut);
            spans.insert(1, Span::styled("… ", self.theme.help_desc));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
