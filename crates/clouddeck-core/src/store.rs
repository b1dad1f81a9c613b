//! Read-only drive tree and path resolution.

use std::collections::HashMap;
use std::path::Path;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::entry::{EntryId, FileEntry};
use crate::error::{NavError, TreeError};
use crate::navigation::Crumb;

/// Summary statistics for a drive tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total size of all files with a known size.
    pub total_size: u64,
    /// Total number of non-folder entries.
    pub total_files: u64,
    /// Total number of folders (excluding the root).
    pub total_folders: u64,
    /// Deepest entry, top-level entries being depth 1.
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a file entry.
    pub fn record_file(&mut self, size: Option<u64>, depth: u32) {
        self.total_files += 1;
        self.total_size += size.unwrap_or(0);
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a folder.
    pub fn record_folder(&mut self, depth: u32) {
        self.total_folders += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Immutable drive tree with an id index.
///
/// Built once at startup; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct TreeStore {
    entries: Vec<FileEntry>,
    root_label: CompactString,
    /// Child-index path from the root to every entry.
    index: HashMap<EntryId, Vec<usize>>,
    stats: TreeStats,
}

impl TreeStore {
    /// Build a store from top-level entries.
    ///
    /// Fails if an id is used twice or an entry claims the root id.
    pub fn new(
        entries: Vec<FileEntry>,
        root_label: impl Into<CompactString>,
    ) -> Result<Self, TreeError> {
        let mut index = HashMap::new();
        let mut stats = TreeStats::new();
        let mut location = Vec::new();
        index_entries(&entries, &mut location, &mut index, &mut stats)?;

        tracing::debug!(
            files = stats.total_files,
            folders = stats.total_folders,
            "Built drive tree"
        );

        Ok(Self {
            entries,
            root_label: root_label.into(),
            index,
            stats,
        })
    }

    /// Parse a tree from JSON (an array of entries).
    pub fn from_json_str(
        json: &str,
        root_label: impl Into<CompactString>,
    ) -> Result<Self, TreeError> {
        let entries: Vec<FileEntry> = serde_json::from_str(json)?;
        Self::new(entries, root_label)
    }

    /// Load a tree from a JSON file.
    pub fn from_path(
        path: impl AsRef<Path>,
        root_label: impl Into<CompactString>,
    ) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TreeError::io(path, e))?;
        Self::from_json_str(&json, root_label)
    }

    /// Top-level entries.
    pub fn root(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Display label of the root folder.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Breadcrumb segment of the root folder.
    pub fn root_crumb(&self) -> Crumb {
        Crumb::new(EntryId::root(), self.root_label.clone())
    }

    /// Summary statistics.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Total number of entries, excluding the root.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the drive has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up any entry by id.
    pub fn get(&self, id: &EntryId) -> Option<&FileEntry> {
        let location = self.index.get(id)?;
        self.entry_at(location)
    }

    /// Children of the folder with the given id.
    ///
    /// The root id yields the top-level entries. Unloaded folders yield
    /// no children.
    pub fn children_of(&self, id: &EntryId) -> Result<&[FileEntry], NavError> {
        if id.is_root() {
            return Ok(self.root());
        }
        match self.get(id) {
            Some(entry) if entry.is_folder() => Ok(entry.children().unwrap_or_default()),
            _ => Err(NavError::not_found(id.clone())),
        }
    }

    /// Resolve a path of folder ids to the children of its last folder.
    ///
    /// The path must start with the root id, and every following id must
    /// name a folder that is a child of the previous one.
    pub fn resolve(&self, path: &[EntryId]) -> Result<&[FileEntry], NavError> {
        let Some((first, rest)) = path.split_first() else {
            return Err(NavError::not_found(EntryId::root()));
        };
        if !first.is_root() {
            return Err(NavError::not_found(first.clone()));
        }

        let mut children = self.root();
        for id in rest {
            let folder = children
                .iter()
                .find(|entry| &entry.id == id && entry.is_folder())
                .ok_or_else(|| NavError::not_found(id.clone()))?;
            children = folder.children().unwrap_or_default();
        }
        Ok(children)
    }

    /// Breadcrumb trail from the root to an entry, inclusive.
    pub fn trail_to(&self, id: &EntryId) -> Option<Vec<Crumb>> {
        let mut trail = vec![self.root_crumb()];
        if id.is_root() {
            return Some(trail);
        }

        let location = self.index.get(id)?;
        let mut siblings = self.root();
        for &i in location {
            let entry = siblings.get(i)?;
            trail.push(entry.crumb());
            siblings = entry.children().unwrap_or_default();
        }
        Some(trail)
    }

    /// Depth-first traversal of every entry, in display order.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.entries)
    }

    fn entry_at(&self, location: &[usize]) -> Option<&FileEntry> {
        let (first, rest) = location.split_first()?;
        let mut entry = self.entries.get(*first)?;
        for &i in rest {
            entry = entry.children()?.get(i)?;
        }
        Some(entry)
    }
}

fn index_entries(
    entries: &[FileEntry],
    location: &mut Vec<usize>,
    index: &mut HashMap<EntryId, Vec<usize>>,
    stats: &mut TreeStats,
) -> Result<(), TreeError> {
    for (i, entry) in entries.iter().enumerate() {
        if entry.id.is_root() {
            return Err(TreeError::ReservedId {
                name: entry.name.to_string(),
            });
        }

        location.push(i);
        let depth = location.len() as u32;
        if index.insert(entry.id.clone(), location.clone()).is_some() {
            return Err(TreeError::DuplicateId {
                id: entry.id.clone(),
            });
        }

        if entry.is_folder() {
            stats.record_folder(depth);
            if let Some(children) = entry.children() {
                index_entries(children, location, index, stats)?;
            }
        } else {
            stats.record_file(entry.size(), depth);
        }
        location.pop();
    }
    Ok(())
}

/// Depth-first iterator over a tree, yielding `(depth, entry)` pairs.
///
/// Top-level entries have depth 0.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FileEntry)>,
}

impl<'a> Walk<'a> {
    fn new(entries: &'a [FileEntry]) -> Self {
        Self {
            stack: entries.iter().rev().map(|entry| (0, entry)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FileEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        if let Some(children) = entry.children() {
            self.stack
                .extend(children.iter().rev().map(|child| (depth + 1, child)));
        }
        Some((depth, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{FileKind, Modified};

    fn leaf(id: &str) -> FileEntry {
        FileEntry::file(id, id, FileKind::Other, Some(5), Modified::relative("now"))
    }

    #[test]
    fn test_tree_stats_record() {
        let mut stats = TreeStats::new();
        stats.record_file(Some(1024), 2);
        stats.record_file(None, 1);
        stats.record_folder(3);

        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_folders, 1);
        assert_eq!(stats.total_size, 1024);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![
            FileEntry::folder("a", "A", Modified::relative("now"), vec![leaf("b")]),
            leaf("b"),
        ];
        let err = TreeStore::new(entries, "My Drive").unwrap_err();
        assert!(matches!(err, TreeError::DuplicateId { id } if id.as_str() == "b"));
    }

    #[test]
    fn test_reserved_id_rejected() {
        let err = TreeStore::new(vec![leaf("")], "My Drive").unwrap_err();
        assert!(matches!(err, TreeError::ReservedId { .. }));
    }

    #[test]
    fn test_walk_order() {
        let entries = vec![
            FileEntry::folder("a", "A", Modified::relative("now"), vec![leaf("a1"), leaf("a2")]),
            leaf("b"),
        ];
        let store = TreeStore::new(entries, "My Drive").unwrap();
        let order: Vec<_> = store
            .walk()
            .map(|(depth, e)| (depth, e.id.as_str().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, "a".to_string()),
                (1, "a1".to_string()),
                (1, "a2".to_string()),
                (0, "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unloaded_folder_resolves_empty() {
        let entries = vec![FileEntry::unloaded_folder("a", "A", Modified::relative("now"))];
        let store = TreeStore::new(entries, "My Drive").unwrap();
        let children = store.resolve(&[EntryId::root(), EntryId::new("a")]).unwrap();
        assert!(children.is_empty());
    }
}
