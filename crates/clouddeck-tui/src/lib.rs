//! Terminal user interface for clouddeck.
//!
//! This crate provides an interactive browser for a clouddeck drive,
//! built with ratatui.
//!
//! # Overview
//!
//! - **Sidebar** - New button, drive sections and storage usage
//! - **Breadcrumbs** - The path from the drive root, each segment one key away
//! - **Grid and list views** - Entries of the current folder with kind icons
//! - **Search** - Filters the current folder by name as you type
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use clouddeck_core::sample::sample_store;
//! use clouddeck_tui::UserSettings;
//!
//! let store = Arc::new(sample_store("My Drive").unwrap());
//! clouddeck_tui::run(store, UserSettings::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `h`/`j`/`k`/`l` - Move through the grid
//! - `Enter` - Open folder
//! - `Backspace` - Parent folder
//! - `1`-`9` - Jump to a breadcrumb segment
//! - `/` - Search the current folder
//! - `v` - Toggle grid/list
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod search;
mod theme;
mod ui;

use std::sync::Arc;

use clouddeck_core::TreeStore;

pub use app::state::{UserSettings, ViewMode};
pub use app::{App, AppResult};
pub use theme::{Theme, ThemeVariant};

/// Startup options that do not come from the settings file.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Search query applied when the browser opens.
    pub initial_filter: Option<String>,
}

impl TuiConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with the root folder already filtered by `query`.
    pub fn with_filter(mut self, query: impl Into<String>) -> Self {
        self.initial_filter = Some(query.into());
        self
    }
}

/// Run the TUI application over `store`.
pub fn run(store: Arc<TreeStore>, settings: UserSettings) -> AppResult<()> {
    run_with_config(store, settings, TuiConfig::default())
}

/// Run the TUI application with startup options.
pub fn run_with_config(
    store: Arc<TreeStore>,
    settings: UserSettings,
    config: TuiConfig,
) -> AppResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    tracing::info!(entries = store.len(), "Starting drive browser");

    let app = App::with_config(store, &settings, config);
    let terminal = ratatui::init();
    let result = rt.block_on(app.run(terminal));
    ratatui::restore();

    result
}
