//! Folder navigation and breadcrumb model.
//!
//! [`Navigator`] owns the [`NavigationState`] (the path stack from the
//! drive root to the folder being viewed) and is the only thing that
//! mutates it. Every transition is checked against the [`TreeStore`]
//! before it is applied, so a rejected request never leaves a partial
//! path behind.

use std::sync::Arc;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::{EntryId, FileEntry};
use crate::error::{InvalidOperation, NavError};
use crate::store::TreeStore;

/// One breadcrumb segment: a folder id and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crumb {
    pub id: EntryId,
    pub name: CompactString,
}

impl Crumb {
    /// Create a new breadcrumb segment.
    pub fn new(id: impl Into<EntryId>, name: impl Into<CompactString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Path stack from the root to the current folder.
///
/// Never empty: the root segment is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    path_stack: Vec<Crumb>,
}

impl NavigationState {
    /// Create a state positioned at the root.
    pub fn new(root: Crumb) -> Self {
        Self {
            path_stack: vec![root],
        }
    }

    /// Breadcrumb trail, root first.
    pub fn path(&self) -> &[Crumb] {
        &self.path_stack
    }

    /// Folder ids of the trail, root first.
    pub fn ids(&self) -> Vec<EntryId> {
        self.path_stack.iter().map(|crumb| crumb.id.clone()).collect()
    }

    /// The segment of the folder being viewed.
    pub fn current(&self) -> &Crumb {
        &self.path_stack[self.path_stack.len() - 1]
    }

    /// Number of segments, including the root.
    pub fn len(&self) -> usize {
        self.path_stack.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.path_stack.is_empty()
    }

    /// Number of folders below the root.
    pub fn depth(&self) -> usize {
        self.path_stack.len() - 1
    }

    fn push(&mut self, crumb: Crumb) {
        self.path_stack.push(crumb);
    }

    fn truncate(&mut self, len: usize) {
        self.path_stack.truncate(len.max(1));
    }

    fn replace(&mut self, trail: Vec<Crumb>) {
        if !trail.is_empty() {
            self.path_stack = trail;
        }
    }
}

/// Navigation controller over a shared, read-only tree.
#[derive(Debug, Clone)]
pub struct Navigator {
    store: Arc<TreeStore>,
    state: NavigationState,
}

impl Navigator {
    /// Create a navigator positioned at the root.
    pub fn new(store: Arc<TreeStore>) -> Self {
        let state = NavigationState::new(store.root_crumb());
        Self { store, state }
    }

    /// The tree being navigated.
    pub fn store(&self) -> &Arc<TreeStore> {
        &self.store
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Breadcrumb trail for rendering.
    pub fn current_path(&self) -> &[Crumb] {
        self.state.path()
    }

    /// Entries of the folder being viewed, in display order.
    pub fn current_children(&self) -> &[FileEntry] {
        // Every transition is validated, so the current folder always resolves.
        self.store
            .children_of(&self.state.current().id)
            .unwrap_or_default()
    }

    /// The folder being viewed, `None` at the root.
    pub fn current_folder(&self) -> Option<&FileEntry> {
        let id = &self.state.current().id;
        if id.is_root() { None } else { self.store.get(id) }
    }

    /// Number of folders below the root.
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Check if the root folder is being viewed.
    pub fn is_at_root(&self) -> bool {
        self.state.len() == 1
    }

    /// Enter a folder listed in the current folder.
    pub fn enter_folder(&mut self, entry: &FileEntry) -> Result<(), NavError> {
        if !entry.is_folder() {
            return Err(reject(InvalidOperation::NotAFolder {
                id: entry.id.clone(),
                name: entry.name.to_string(),
            }));
        }
        self.enter(&entry.id)
    }

    /// Enter a folder of the current folder by id.
    pub fn enter(&mut self, id: &EntryId) -> Result<(), NavError> {
        let crumb = match self.current_children().iter().find(|entry| &entry.id == id) {
            Some(entry) if entry.is_folder() => entry.crumb(),
            Some(entry) => {
                return Err(reject(InvalidOperation::NotAFolder {
                    id: entry.id.clone(),
                    name: entry.name.to_string(),
                }));
            }
            None => {
                return Err(match self.store.get(id) {
                    None => NavError::not_found(id.clone()),
                    Some(entry) if !entry.is_folder() => reject(InvalidOperation::NotAFolder {
                        id: entry.id.clone(),
                        name: entry.name.to_string(),
                    }),
                    Some(entry) => reject(InvalidOperation::NotInCurrentFolder {
                        id: entry.id.clone(),
                        name: entry.name.to_string(),
                    }),
                });
            }
        };

        debug!(id = %crumb.id, name = %crumb.name, "Entering folder");
        self.state.push(crumb);
        Ok(())
    }

    /// Jump to the breadcrumb segment at `index` (0 is the root).
    ///
    /// The truncated path is resolved against the store before it is
    /// committed, so intermediate segments restore their own children.
    pub fn jump_to_segment(&mut self, index: usize) -> Result<(), NavError> {
        let len = self.state.len();
        if index >= len {
            return Err(reject(InvalidOperation::SegmentOutOfRange { index, len }));
        }

        let ids: Vec<EntryId> = self.state.path()[..=index]
            .iter()
            .map(|crumb| crumb.id.clone())
            .collect();
        self.store.resolve(&ids)?;

        debug!(index, "Jumping to breadcrumb segment");
        self.state.truncate(index + 1);
        Ok(())
    }

    /// Go to the parent folder.
    pub fn go_up(&mut self) -> Result<(), NavError> {
        if self.is_at_root() {
            return Err(reject(InvalidOperation::AtRoot));
        }
        self.jump_to_segment(self.state.len() - 2)
    }

    /// Go straight back to the root folder.
    pub fn go_home(&mut self) {
        debug!(from_depth = self.depth(), "Returning to drive root");
        self.state.truncate(1);
    }

    /// Navigate directly to any folder in the tree by id.
    pub fn reveal(&mut self, id: &EntryId) -> Result<(), NavError> {
        if let Some(entry) = self.store.get(id) {
            if !entry.is_folder() {
                return Err(reject(InvalidOperation::NotAFolder {
                    id: entry.id.clone(),
                    name: entry.name.to_string(),
                }));
            }
        }
        let trail = self
            .store
            .trail_to(id)
            .ok_or_else(|| NavError::not_found(id.clone()))?;

        debug!(%id, depth = trail.len() - 1, "Revealing folder");
        self.state.replace(trail);
        Ok(())
    }
}

fn reject(reason: InvalidOperation) -> NavError {
    debug!(%reason, "Navigation rejected");
    NavError::InvalidOperation(reason)
}
