//! Core types and navigation model for clouddeck.
//!
//! This crate provides the drive data model, the read-only tree store,
//! the folder navigator with its breadcrumb path, and the name filter
//! applied to the folder being viewed.

mod config;
mod entry;
mod error;
mod navigation;
pub mod sample;
pub mod search;
mod store;

pub use config::{DriveConfig, DriveConfigBuilder, StorageQuota};
pub use entry::{EntryId, EntryKind, EntryNode, FileEntry, FileKind, Modified, format_size};
pub use error::{InvalidOperation, NavError, TreeError};
pub use navigation::{Crumb, NavigationState, Navigator};
pub use search::SearchQuery;
pub use store::{TreeStats, TreeStore, Walk};
