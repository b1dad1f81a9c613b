//! Application state types and enums.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use clouddeck_core::{DriveConfig, EntryId};

use crate::theme::ThemeVariant;

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    /// Typing into the search box.
    Search,
    /// Action menu open for one entry.
    ActionMenu,
    Quit,
}

/// Which pane receives movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Files,
    Sidebar,
}

impl Focus {
    /// Toggle between the panes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Files => Self::Sidebar,
            Self::Sidebar => Self::Files,
        }
    }
}

/// Layout of the file area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Cards with a large icon (default).
    #[default]
    Grid,
    /// One row per entry.
    List,
}

impl ViewMode {
    /// Toggle between view modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Sidebar sections. Only the drive itself is browsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, FromRepr)]
pub enum SidebarSection {
    #[default]
    #[strum(to_string = "My Drive")]
    MyDrive,
    #[strum(to_string = "Shared with me")]
    SharedWithMe,
    Recent,
    Starred,
    Trash,
}

impl SidebarSection {
    /// Move to the next section, stopping at the last.
    pub fn next(self) -> Self {
        Self::from_repr(self as usize + 1).unwrap_or(self)
    }

    /// Move to the previous section, stopping at the first.
    pub fn prev(self) -> Self {
        (self as usize)
            .checked_sub(1)
            .and_then(Self::from_repr)
            .unwrap_or(self)
    }

    /// Number of sections.
    pub fn count() -> usize {
        Self::iter().count()
    }
}

/// Actions offered in the per-entry menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
pub enum EntryAction {
    Download,
    Share,
    #[strum(to_string = "Add to starred")]
    Star,
    #[strum(to_string = "Move to trash")]
    Trash,
}

impl EntryAction {
    /// Check if the action is destructive (shown in the error color).
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Trash)
    }
}

/// Open action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Entry the menu acts on.
    pub entry_id: EntryId,
    /// Entry display name.
    pub entry_name: String,
    /// Highlighted action.
    pub selected: usize,
}

impl MenuState {
    /// Open a menu for an entry.
    pub fn new(entry_id: EntryId, entry_name: impl Into<String>) -> Self {
        Self {
            entry_id,
            entry_name: entry_name.into(),
            selected: 0,
        }
    }

    /// Move selection up.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn move_down(&mut self) {
        let max = EntryAction::iter().count().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    /// The highlighted action.
    pub fn action(&self) -> EntryAction {
        EntryAction::from_repr(self.selected).unwrap_or(EntryAction::Download)
    }
}

/// Severity of a footer notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// Transient message shown in the footer.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    shown_at: Instant,
}

impl Notice {
    /// Create a notice shown from now.
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    /// Check if the notice has been shown for longer than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

/// Selection and scroll position in the file area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected index in the filtered entries.
    pub selected: usize,
    /// First visible row.
    pub offset: usize,
}

impl Selection {
    /// Reset to the first entry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp the selection to `count` entries.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Keep the row holding the selection within `rows` visible rows.
    pub fn ensure_visible(&mut self, row: usize, rows: usize) {
        let rows = rows.max(1);
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + rows {
            self.offset = row + 1 - rows;
        }
    }
}

/// User settings read from the config file.
///
/// Settings are read once at startup and never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Color theme.
    pub theme: ThemeVariant,
    /// Initial layout of the file area.
    pub view_mode: ViewMode,
    /// Drive options.
    pub drive: DriveConfig,
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("clouddeck").join("config.toml"))
    }

    /// Load settings from the default location, or return defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a file, falling back to defaults if it is
    /// missing or malformed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings");
                Self::default()
            }
        }
    }
}
