//! Storage quota bar widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use clouddeck_core::StorageQuota;

const FILLED: char = '█';
const EMPTY: char = '░';

/// A horizontal bar showing how much of the quota is used.
pub struct QuotaBar {
    /// Value to display (0.0 - 1.0).
    ratio: f64,
    /// Style for filled portion.
    filled_style: Style,
    /// Style for empty portion.
    empty_style: Style,
}

impl QuotaBar {
    /// Create a bar for a raw ratio.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            filled_style: Style::default(),
            empty_style: Style::default(),
        }
    }

    /// Create a bar for a storage quota.
    pub fn for_quota(quota: &StorageQuota) -> Self {
        Self::new(quota.ratio())
    }

    /// Set the style for the filled portion.
    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    /// Set the style for the empty portion.
    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }
}

impl Widget for QuotaBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled_width = (area.width as f64 * self.ratio).round() as u16;

        for x in 0..area.width {
            let (char, style) = if x < filled_width {
                (FILLED, self.filled_style)
            } else {
                (EMPTY, self.empty_style)
            };

            buf[(area.x + x, area.y)].set_char(char).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(buf: &Buffer, width: u16) -> usize {
        (0..width)
            .filter(|&x| buf[(x, 0)].symbol() == FILLED.to_string())
            .count()
    }

    #[test]
    fn test_quota_bar_empty() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        QuotaBar::new(0.0).render(area, &mut buf);

        for x in 0..10 {
            assert_eq!(buf[(x, 0)].symbol(), EMPTY.to_string());
        }
    }

    #[test]
    fn test_quota_bar_default_quota() {
        // 6.8 GB of 15 GB rounds to 45% of twenty cells
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        QuotaBar::for_quota(&StorageQuota::default()).render(area, &mut buf);

        assert_eq!(filled_cells(&buf, 20), 9);
    }

    #[test]
    fn test_quota_bar_clamps_overuse() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        QuotaBar::for_quota(&StorageQuota::new(30, 10)).render(area, &mut buf);

        assert_eq!(filled_cells(&buf, 10), 10);
    }
}
