//! Main application state and logic.

pub(crate) mod constants;
mod navigation;
mod render;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};

use clouddeck_core::{EntryId, FileEntry, NavError, Navigator, StorageQuota, TreeStore};

use crate::event::KeyAction;
use crate::search::SearchState;
use crate::theme::Theme;
use crate::ui::{AppLayout, EntryGrid, EntryList, grid_columns};
use crate::TuiConfig;

use self::constants::{NOTICE_TTL_SECS, TICK_INTERVAL_MS, UPLOAD_PLACEHOLDER};
use self::navigation::{GridNav, ListNavigator};
use self::render::{RenderContext, render_app};
use self::state::{
    AppMode, EntryAction, Focus, MenuState, Notice, NoticeLevel, Selection, SidebarSection,
    UserSettings, ViewMode,
};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Folder navigation over the drive tree.
    navigator: Navigator,
    /// Storage usage shown in the sidebar.
    quota: StorageQuota,
    /// Current UI mode.
    mode: AppMode,
    /// Pane receiving movement keys.
    focus: Focus,
    /// Grid or list layout.
    view_mode: ViewMode,
    /// Color theme.
    theme: Theme,
    /// Search box and its filter.
    search: SearchState,
    /// Selection in the filtered entries.
    selection: Selection,
    /// Highlighted sidebar section.
    sidebar: SidebarSection,
    /// Open action menu.
    menu: Option<MenuState>,
    /// Footer message.
    notice: Option<Notice>,
    /// Grid columns and visible rows of the last laid-out file area.
    viewport: (usize, usize),
    /// Whether the UI needs to be redrawn.
    needs_redraw: bool,
}

impl App {
    /// Create an application browsing `store` with the given settings.
    pub fn new(store: Arc<TreeStore>, settings: &UserSettings) -> Self {
        Self::with_config(store, settings, TuiConfig::default())
    }

    /// Create an application with startup options.
    pub fn with_config(store: Arc<TreeStore>, settings: &UserSettings, config: TuiConfig) -> Self {
        let mut search = SearchState::new();
        if let Some(query) = config.initial_filter {
            search.set_query(query);
        }

        Self {
            navigator: Navigator::new(store),
            quota: settings.drive.quota,
            mode: AppMode::default(),
            focus: Focus::default(),
            view_mode: settings.view_mode,
            theme: Theme::from_variant(settings.theme),
            search,
            selection: Selection::default(),
            sidebar: SidebarSection::default(),
            menu: None,
            notice: None,
            viewport: (1, 1),
            needs_redraw: true,
        }
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                let size = terminal.size()?;
                self.resize(Rect::new(0, 0, size.width, size.height));
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key_event(key);
                            self.needs_redraw = true;
                        }
                        Some(Ok(Event::Resize(..))) => {
                            self.needs_redraw = true;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                _ = interval.tick() => {
                    if self.expire_notice() {
                        self.needs_redraw = true;
                    }
                }
            }
        }

        tracing::debug!("Leaving event loop");
        Ok(())
    }

    /// Render the application.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Recompute the file area geometry for a terminal of size `area`.
    fn resize(&mut self, area: Rect) {
        let files = AppLayout::new(area).files;
        self.viewport = match self.view_mode {
            ViewMode::Grid => (grid_columns(files.width), EntryGrid::visible_rows(files)),
            ViewMode::List => (1, EntryList::visible_rows(files)),
        };
        self.sync_scroll();
    }

    /// Entries of the current folder that match the search query.
    pub fn visible_entries(&self) -> Vec<&FileEntry> {
        self.search.query().apply(self.navigator.current_children())
    }

    /// The highlighted entry, if any.
    fn selected_entry(&self) -> Option<&FileEntry> {
        self.visible_entries().get(self.selection.selected).copied()
    }

    /// Clamp the selection and scroll it into view.
    fn sync_scroll(&mut self) {
        let count = self.visible_entries().len();
        let (columns, rows) = self.viewport;
        self.selection.clamp(count);
        self.selection
            .ensure_visible(self.selection.selected / columns.max(1), rows);
    }

    fn show_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice::new(level, text));
    }

    /// Drop the footer notice once it has been shown long enough.
    fn expire_notice(&mut self) -> bool {
        let ttl = Duration::from_secs(NOTICE_TTL_SECS);
        if self.notice.as_ref().is_some_and(|n| n.is_expired(ttl)) {
            self.notice = None;
            return true;
        }
        false
    }

    /// Apply the outcome of a folder transition.
    fn after_navigation(&mut self, result: Result<(), NavError>) {
        match result {
            Ok(()) => {
                self.selection.reset();
                self.sync_scroll();
            }
            Err(e) => self.show_notice(NoticeLevel::Warning, e.to_string()),
        }
    }

    /// Dispatch a key event according to the current mode.
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.mode == AppMode::Search {
            self.handle_search_input(key);
        } else {
            self.handle_action(KeyAction::from_key_event(key));
        }
    }

    /// Handle a key action.
    fn handle_action(&mut self, action: KeyAction) {
        match self.mode {
            AppMode::Help => {
                if matches!(
                    action,
                    KeyAction::ToggleHelp | KeyAction::Quit | KeyAction::Cancel
                ) {
                    self.mode = AppMode::Normal;
                }
                return;
            }
            AppMode::ActionMenu => {
                self.handle_menu_action(action);
                return;
            }
            AppMode::Search | AppMode::Quit => return,
            AppMode::Normal => {}
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => {
                self.mode = AppMode::Quit;
            }
            KeyAction::Cancel => {
                self.notice = None;
                if self.search.has_query() {
                    self.search.clear();
                    self.selection.reset();
                    self.sync_scroll();
                } else if self.focus == Focus::Sidebar {
                    self.focus = Focus::Files;
                }
            }
            KeyAction::ToggleHelp => {
                self.mode = AppMode::Help;
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
            }
            KeyAction::ToggleView => {
                self.view_mode = self.view_mode.toggle();
                self.selection.offset = 0;
                self.needs_redraw = true;
            }
            KeyAction::ToggleFocus => {
                self.focus = self.focus.toggle();
            }
            KeyAction::Search => {
                self.search.activate();
                self.mode = AppMode::Search;
            }
            KeyAction::Upload => {
                self.show_notice(NoticeLevel::Info, UPLOAD_PLACEHOLDER);
            }
            KeyAction::NavigateUp => {
                let result = self.navigator.go_up();
                self.after_navigation(result);
            }
            KeyAction::NavigateHome => {
                self.navigator.go_home();
                self.after_navigation(Ok(()));
            }
            KeyAction::JumpToSegment(index) => {
                let result = self.navigator.jump_to_segment(index);
                self.after_navigation(result);
            }
            KeyAction::ActionMenu => {
                let target = self
                    .selected_entry()
                    .map(|entry| (entry.id.clone(), entry.name.to_string()));
                if let Some((id, name)) = target {
                    self.menu = Some(MenuState::new(id, name));
                    self.mode = AppMode::ActionMenu;
                }
            }
            KeyAction::Open if self.focus == Focus::Sidebar => {
                self.open_section();
            }
            KeyAction::Open => {
                self.open_selected();
            }
            _ if self.focus == Focus::Sidebar => {
                self.move_sidebar(action);
            }
            _ => {
                self.move_selection(action);
            }
        }
    }

    /// Move the selection in the file area.
    fn move_selection(&mut self, action: KeyAction) {
        let count = self.visible_entries().len();
        let (columns, rows) = self.viewport;
        let columns = match self.view_mode {
            ViewMode::Grid => columns,
            ViewMode::List => 1,
        };

        let mut nav = GridNav::new(&mut self.selection.selected, count, columns);
        match action {
            KeyAction::MoveUp => nav.row_up(),
            KeyAction::MoveDown => nav.row_down(),
            KeyAction::MoveLeft => nav.left(),
            KeyAction::MoveRight => nav.right(),
            KeyAction::JumpToTop => nav.jump_to_top(),
            KeyAction::JumpToBottom => nav.jump_to_bottom(),
            KeyAction::PageUp => nav.page_up(),
            KeyAction::PageDown => nav.page_down(),
            _ => return,
        }
        self.selection
            .ensure_visible(self.selection.selected / columns.max(1), rows);
    }

    fn move_sidebar(&mut self, action: KeyAction) {
        self.sidebar = match action {
            KeyAction::MoveUp => self.sidebar.prev(),
            KeyAction::MoveDown => self.sidebar.next(),
            KeyAction::JumpToTop => SidebarSection::MyDrive,
            KeyAction::JumpToBottom => SidebarSection::Trash,
            _ => return,
        };
    }

    /// Open the highlighted sidebar section.
    fn open_section(&mut self) {
        match self.sidebar {
            SidebarSection::MyDrive => {
                self.navigator.go_home();
                self.after_navigation(Ok(()));
                self.focus = Focus::Files;
            }
            section => {
                self.show_notice(NoticeLevel::Info, format!("{section} is not available yet"));
            }
        }
    }

    /// Enter the highlighted folder, or report the file that would open.
    fn open_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        if entry.is_folder() {
            let id = entry.id.clone();
            let result = self.navigator.enter(&id);
            self.after_navigation(result);
            return;
        }

        let text = match entry.url() {
            Some(url) => format!("Opening {} ({url})", entry.name),
            None => format!("Opening {}", entry.name),
        };
        self.show_notice(NoticeLevel::Info, text);
    }

    /// Handle a key action while the action menu is open.
    fn handle_menu_action(&mut self, action: KeyAction) {
        let Some(menu) = self.menu.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        match action {
            KeyAction::MoveUp => menu.move_up(),
            KeyAction::MoveDown => menu.move_down(),
            KeyAction::Open => {
                let chosen = menu.action();
                let name = menu.entry_name.clone();
                let id = menu.entry_id.clone();
                self.close_menu();
                self.apply_entry_action(chosen, &id, &name);
            }
            KeyAction::Cancel | KeyAction::Quit | KeyAction::ActionMenu => self.close_menu(),
            KeyAction::ForceQuit => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    fn close_menu(&mut self) {
        self.menu = None;
        self.mode = AppMode::Normal;
    }

    /// Acknowledge a menu action. The drive is read-only, so nothing
    /// changes in the tree.
    fn apply_entry_action(&mut self, action: EntryAction, id: &EntryId, name: &str) {
        tracing::debug!(%id, %action, "Entry action requested");
        let level = if action.is_destructive() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Success
        };
        self.show_notice(level, format!("{action}: {name}"));
    }

    /// Handle a key while the search box has focus.
    fn handle_search_input(&mut self, key: KeyEvent) {
        let before = self.search.text().to_string();

        match (key.code, key.modifiers) {
            // Leave and drop the filter
            (KeyCode::Esc, _) => {
                self.search.clear();
                self.search.deactivate();
                self.mode = AppMode::Normal;
            }
            // Leave and keep the filter
            (KeyCode::Enter, _) | (KeyCode::Tab, _) => {
                self.search.deactivate();
                self.mode = AppMode::Normal;
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.mode = AppMode::Quit;
            }
            (KeyCode::Left, _) => self.search.move_cursor_left(),
            (KeyCode::Right, _) => self.search.move_cursor_right(),
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.search.move_cursor_start();
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.search.move_cursor_end();
            }
            (KeyCode::Backspace, _) => self.search.delete_char_before(),
            (KeyCode::Delete, _) => self.search.delete_char_at(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.search.clear(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.search.insert_char(c);
            }
            _ => {}
        }

        if self.search.text() != before {
            self.selection.reset();
            self.sync_scroll();
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = self.visible_entries();
        let ctx = RenderContext {
            mode: self.mode,
            focus: self.focus,
            view_mode: self.view_mode,
            theme: &self.theme,
            path: self.navigator.current_path(),
            entries: &entries,
            total: self.navigator.current_children().len(),
            selection: self.selection,
            sidebar: self.sidebar,
            quota: &self.quota,
            search: &self.search,
            menu: self.menu.as_ref(),
            notice: self.notice.as_ref(),
            now: Utc::now(),
        };
        render_app(&ctx, area, buf);
    }
}
