//! Error types for navigation and tree loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::entry::EntryId;

/// Errors returned by path resolution and navigation.
///
/// Both kinds are recoverable: the rejected transition leaves the
/// navigation state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// An id in a path does not exist or is not a folder at that position.
    #[error("Folder not found: '{id}'")]
    NotFound { id: EntryId },

    /// The requested transition is not allowed from the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
}

impl NavError {
    /// Create a not-found error for an id.
    pub fn not_found(id: impl Into<EntryId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-operation error.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

/// Reason a navigation request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    /// Attempted to enter an entry that is not a folder.
    #[error("'{name}' is not a folder")]
    NotAFolder { id: EntryId, name: String },

    /// Attempted to enter a folder that is not a child of the current folder.
    #[error("'{name}' is not in the current folder")]
    NotInCurrentFolder { id: EntryId, name: String },

    /// Breadcrumb index past the end of the path.
    #[error("breadcrumb segment {index} is out of range (path has {len} segments)")]
    SegmentOutOfRange { index: usize, len: usize },

    /// Attempted to go up from the root folder.
    #[error("already at the root folder")]
    AtRoot,
}

/// Errors that can occur while building or loading a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two entries share the same id.
    #[error("Duplicate entry id: '{id}'")]
    DuplicateId { id: EntryId },

    /// An entry uses the id reserved for the drive root.
    #[error("Entry '{name}' uses the reserved root id")]
    ReservedId { name: String },

    /// An entry violates the folder/file shape rules.
    #[error("Invalid entry '{id}': {message}")]
    InvalidEntry { id: EntryId, message: String },

    /// Tree file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tree JSON could not be parsed.
    #[error("Invalid tree JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-entry error.
    pub fn invalid_entry(id: &EntryId, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            id: id.clone(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_error_kinds() {
        let err = NavError::not_found("x");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_operation());

        let err: NavError = InvalidOperation::AtRoot.into();
        assert!(err.is_invalid_operation());
        assert_eq!(err.to_string(), "Invalid operation: already at the root folder");
    }

    #[test]
    fn test_tree_error_io() {
        let err = TreeError::io(
            "/test/tree.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, TreeError::Io { .. }));
        assert!(err.to_string().contains("/test/tree.json"));
    }
}
