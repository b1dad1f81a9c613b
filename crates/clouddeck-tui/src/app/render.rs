//! Application rendering.

use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use clouddeck_core::{Crumb, EntryKind, FileEntry, StorageQuota};

use crate::search::SearchState;
use crate::theme::Theme;
use crate::ui::modals::ActionMenu;
use crate::ui::{
    AppLayout, BreadcrumbBar, EmptyState, EntryGrid, EntryList, HelpOverlay, Sidebar,
    grid_columns,
};

use super::state::{
    AppMode, Focus, MenuState, Notice, NoticeLevel, Selection, SidebarSection, ViewMode,
};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub focus: Focus,
    pub view_mode: ViewMode,
    pub theme: &'a Theme,
    /// Breadcrumb path, root first.
    pub path: &'a [Crumb],
    /// Entries after filtering.
    pub entries: &'a [&'a FileEntry],
    /// Entry count before filtering.
    pub total: usize,
    pub selection: Selection,
    pub sidebar: SidebarSection,
    pub quota: &'a StorageQuota,
    pub search: &'a SearchState,
    pub menu: Option<&'a MenuState>,
    pub notice: Option<&'a Notice>,
    pub now: DateTime<Utc>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);

    if let Some(sidebar) = layout.sidebar {
        Sidebar::new(ctx.theme, ctx.quota, ctx.sidebar)
            .focused(ctx.focus == Focus::Sidebar)
            .render(sidebar, buf);
    }

    BreadcrumbBar::new(ctx.theme, ctx.path).render(layout.breadcrumb, buf);
    render_toolbar(ctx, layout.toolbar, buf);
    render_files(ctx, layout.files, buf);
    render_footer(ctx, layout.footer, buf);

    // Render overlays
    match ctx.mode {
        AppMode::Help => {
            HelpOverlay::new(ctx.theme).render(area, buf);
        }
        AppMode::ActionMenu => {
            if let Some(menu) = ctx.menu {
                ActionMenu::new(ctx.theme, menu).render(area, buf);
            }
        }
        _ => {}
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, ctx.theme.header);

    let [title_area, search_area, _] = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Max(48),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = Line::from(vec![
        Span::styled(" ■ ", ctx.theme.kind_style(EntryKind::Folder)),
        Span::styled("Drive ", ctx.theme.title.add_modifier(Modifier::BOLD)),
    ]);
    buf.set_line(title_area.x, title_area.y, &title, title_area.width);

    render_search_box(ctx, search_area, buf);
}

/// Search input with a placeholder, and a cursor while focused.
fn render_search_box(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    if area.width < 6 {
        return;
    }
    buf.set_style(area, ctx.theme.search_input);

    let prefix = " ⌕ ";
    let text = ctx.search.text();
    let line = if text.is_empty() && !ctx.search.active {
        Line::from(vec![
            Span::raw(prefix),
            Span::styled("Search in Drive", Style::default().fg(ctx.theme.muted)),
        ])
    } else {
        Line::from(vec![Span::raw(prefix), Span::raw(text)])
    };
    buf.set_line(area.x, area.y, &line, area.width);

    if ctx.search.active {
        let before: String = text.chars().take(ctx.search.cursor()).collect();
        let x = area.x + (prefix.width() + before.width()) as u16;
        if x < area.x + area.width {
            buf[(x, area.y)].set_style(ctx.theme.search_cursor);
        }
    }
}

fn render_toolbar(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let summary = if ctx.search.has_query() {
        format!(
            " {} of {} match \"{}\"",
            ctx.entries.len(),
            ctx.total,
            ctx.search.text()
        )
    } else {
        match ctx.total {
            1 => " 1 item".to_string(),
            n => format!(" {n} items"),
        }
    };

    let view_style = |mode: ViewMode| {
        if mode == ctx.view_mode {
            ctx.theme.button
        } else {
            Style::default().fg(ctx.theme.muted)
        }
    };
    let controls = Line::from(vec![
        Span::styled(" ↑ Upload ", ctx.theme.button),
        Span::raw("  "),
        Span::styled(" ▦ Grid ", view_style(ViewMode::Grid)),
        Span::styled(" ≡ List ", view_style(ViewMode::List)),
        Span::raw(" "),
    ]);

    let controls_width = controls.width() as u16;
    buf.set_line(
        area.x,
        area.y,
        &Line::styled(summary, Style::default().fg(ctx.theme.muted)),
        area.width.saturating_sub(controls_width),
    );
    if area.width > controls_width {
        let x = area.x + area.width - controls_width;
        buf.set_line(x, area.y, &controls, controls_width);
    }
}

fn render_files(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    if ctx.entries.is_empty() {
        EmptyState::new(ctx.theme, ctx.search.has_query()).render(area, buf);
        return;
    }

    let selected = (ctx.focus == Focus::Files).then_some(ctx.selection.selected);
    match ctx.view_mode {
        ViewMode::Grid => {
            // Offset is tracked in rows of cards
            let columns = grid_columns(area.width);
            let rows = EntryGrid::visible_rows(area);
            let row = ctx.selection.selected / columns;
            let offset = ctx.selection.offset.min(row).max((row + 1).saturating_sub(rows));
            EntryGrid::new(ctx.theme, ctx.entries, ctx.now)
                .selected(selected)
                .offset(offset)
                .render(area, buf);
        }
        ViewMode::List => {
            EntryList::new(ctx.theme, ctx.entries, ctx.now)
                .selected(selected)
                .offset(ctx.selection.offset)
                .render(area, buf);
        }
    }
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    if let Some(notice) = ctx.notice {
        let color = match notice.level {
            NoticeLevel::Info => ctx.theme.info,
            NoticeLevel::Success => ctx.theme.success,
            NoticeLevel::Warning => ctx.theme.warning,
        };
        let line = Line::from(Span::styled(
            format!(" {} ", notice.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line)
            .style(ctx.theme.footer)
            .render(area, buf);
        return;
    }

    let mut keys: Vec<(&str, &str)> = match ctx.mode {
        AppMode::Search => vec![("Enter", "Apply"), ("Esc", "Clear")],
        AppMode::ActionMenu => vec![("j/k", "Nav"), ("Enter", "Select"), ("Esc", "Close")],
        _ => match ctx.focus {
            Focus::Files => {
                let mut v = vec![("Enter", "Open"), ("Bksp", "Up")];
                if ctx.path.len() > 1 {
                    v.push(("1-9", "Crumb"));
                }
                v.extend([("/", "Search"), ("m", "Menu"), ("u", "Upload"), ("v", "View")]);
                if ctx.search.has_query() {
                    v.push(("Esc", "Clear"));
                }
                v
            }
            Focus::Sidebar => vec![("j/k", "Nav"), ("Enter", "Open"), ("Tab", "Files")],
        },
    };

    keys.extend([("?", "Help"), ("q", "Quit")]);

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {} ", key), ctx.theme.help_key),
                Span::styled(format!("{} ", desc), ctx.theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}
