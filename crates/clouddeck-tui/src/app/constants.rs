//! Application constants.

/// Number of items to move when pressing Page Up/Down.
pub const PAGE_SIZE: usize = 10;

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 250;

/// How long a footer notice stays visible, in seconds.
pub const NOTICE_TTL_SECS: u64 = 4;

/// Width of one grid card, including its border.
pub const GRID_CELL_WIDTH: u16 = 24;

/// Height of one grid card, including its border.
pub const GRID_CELL_HEIGHT: u16 = 6;

/// Message shown by the placeholder upload actions.
pub const UPLOAD_PLACEHOLDER: &str = "Upload functionality would be implemented here!";
