//! Search box for the file list.
//!
//! The box edits a [`clouddeck_core::SearchQuery`] that filters the
//! folder being viewed.

mod state;

pub use state::SearchState;
