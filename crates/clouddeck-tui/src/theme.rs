//! Color theme for the TUI.
//!
//! Dark and light themes built from a semantic palette based on
//! Tailwind CSS colors. Entry kinds get the same hues the drive uses for
//! its icons.

use clouddeck_core::EntryKind;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Interactive elements
    pub selected: Style,
    pub focused_border: Style,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub button: Style,

    // Entry kinds
    pub folder: Color,
    pub document: Color,
    pub image: Color,
    pub video: Color,
    pub audio: Color,
    pub archive: Color,
    pub other: Color,

    // Quota bar
    pub quota_bar: Style,
    pub quota_bg: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,

    // Breadcrumb and search
    pub crumb: Style,
    pub crumb_current: Style,
    pub search_input: Style,
    pub search_cursor: Style,
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Accent colors (Tailwind CSS)
        let blue_400 = Color::Rgb(96, 165, 250);
        let blue_500 = Color::Rgb(59, 130, 246);
        let blue_600 = Color::Rgb(37, 99, 235);
        let green_500 = Color::Rgb(34, 197, 94);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let orange_500 = Color::Rgb(249, 115, 22);
        let red_500 = Color::Rgb(239, 68, 68);
        let purple_500 = Color::Rgb(168, 85, 247);
        let gray_500 = Color::Rgb(107, 114, 128);

        Self {
            variant: ThemeVariant::Dark,
            background: slate_900,
            foreground: slate_100,
            muted: slate_500,

            selected: Style::new().bg(slate_700).fg(slate_50).add_modifier(Modifier::BOLD),
            focused_border: Style::new().fg(blue_400),

            success: green_500,
            warning: yellow_500,
            error: red_500,
            info: blue_400,

            border: Style::new().fg(slate_600),
            title: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),
            button: Style::new().bg(blue_600).fg(slate_50).add_modifier(Modifier::BOLD),

            folder: blue_500,
            document: red_500,
            image: green_500,
            video: purple_500,
            audio: orange_500,
            archive: yellow_500,
            other: gray_500,

            quota_bar: Style::new().fg(blue_500),
            quota_bg: Style::new().fg(slate_700),

            header: Style::new().bg(slate_800).fg(slate_100),
            footer: Style::new().bg(slate_800).fg(slate_400),

            crumb: Style::new().fg(slate_400),
            crumb_current: Style::new().fg(slate_100).add_modifier(Modifier::BOLD),
            search_input: Style::new().bg(slate_800).fg(slate_100),
            search_cursor: Style::new().add_modifier(Modifier::REVERSED),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        // Slate palette (Tailwind CSS)
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        // Accent colors (Tailwind CSS - darker variants for light theme)
        let blue_600 = Color::Rgb(37, 99, 235);
        let blue_700 = Color::Rgb(29, 78, 216);
        let green_600 = Color::Rgb(22, 163, 74);
        let yellow_600 = Color::Rgb(202, 138, 4);
        let orange_600 = Color::Rgb(234, 88, 12);
        let red_600 = Color::Rgb(220, 38, 38);
        let purple_600 = Color::Rgb(147, 51, 234);
        let gray_500 = Color::Rgb(107, 114, 128);

        Self {
            variant: ThemeVariant::Light,
            background: slate_50,
            foreground: slate_900,
            muted: slate_500,

            selected: Style::new().bg(slate_200).fg(slate_900).add_modifier(Modifier::BOLD),
            focused_border: Style::new().fg(blue_700),

            success: green_600,
            warning: yellow_600,
            error: red_600,
            info: blue_600,

            border: Style::new().fg(slate_400),
            title: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),
            button: Style::new().bg(blue_600).fg(slate_50).add_modifier(Modifier::BOLD),

            folder: blue_600,
            document: red_600,
            image: green_600,
            video: purple_600,
            audio: orange_600,
            archive: yellow_600,
            other: gray_500,

            quota_bar: Style::new().fg(blue_600),
            quota_bg: Style::new().fg(slate_200),

            header: Style::new().bg(slate_100).fg(slate_800),
            footer: Style::new().bg(slate_100).fg(slate_600),

            crumb: Style::new().fg(slate_600),
            crumb_current: Style::new().fg(slate_900).add_modifier(Modifier::BOLD),
            search_input: Style::new().bg(slate_100).fg(slate_900),
            search_cursor: Style::new().add_modifier(Modifier::REVERSED),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }

    /// Icon color for an entry kind.
    pub fn kind_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Folder => self.folder,
            EntryKind::Document => self.document,
            EntryKind::Image => self.image,
            EntryKind::Video => self.video,
            EntryKind::Audio => self.audio,
            EntryKind::Archive => self.archive,
            EntryKind::Other => self.other,
        }
    }

    /// Icon style for an entry kind.
    pub fn kind_style(&self, kind: EntryKind) -> Style {
        let style = Style::new().fg(self.kind_color(kind));
        if kind.is_folder() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Icon glyph for an entry kind.
pub fn kind_glyph(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Folder => "■",
        EntryKind::Document => "≡",
        EntryKind::Image => "◩",
        EntryKind::Video => "▶",
        EntryKind::Audio => "♪",
        EntryKind::Archive => "▤",
        EntryKind::Other => "□",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::dark();
        assert_eq!(theme.toggle().variant, ThemeVariant::Light);
        assert_eq!(theme.toggle().toggle().variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_every_kind_has_distinct_color() {
        let theme = Theme::dark();
        let colors: Vec<Color> = EntryKind::iter().map(|k| theme.kind_color(k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
