//! Name filter for the current folder.
//!
//! Matching is a case-insensitive substring test on the entry name. It
//! only looks at the entries it is given and never descends into folders.

use crate::entry::FileEntry;

/// A prepared search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Prepare a query.
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if the query is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Check if an entry name contains the query, ignoring case.
    pub fn matches(&self, entry: &FileEntry) -> bool {
        self.needle.is_empty() || entry.name.to_lowercase().contains(&self.needle)
    }

    /// Keep the matching entries, preserving their order.
    pub fn apply<'a>(&self, entries: &'a [FileEntry]) -> Vec<&'a FileEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Filter entries by a case-insensitive substring of their name.
pub fn filter<'a>(entries: &'a [FileEntry], query: &str) -> Vec<&'a FileEntry> {
    SearchQuery::new(query).apply(entries)
}

/// Check if a single entry matches a query.
pub fn matches(entry: &FileEntry, query: &str) -> bool {
    SearchQuery::new(query).matches(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{FileKind, Modified};

    fn named(id: &str, name: &str) -> FileEntry {
        FileEntry::file(id, name, FileKind::Document, None, Modified::relative("now"))
    }

    #[test]
    fn test_empty_query_is_identity() {
        let entries = vec![named("1", "b"), named("2", "a"), named("3", "c")];
        let result = filter(&entries, "");
        let ids: Vec<_> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_case_insensitive() {
        let entries = vec![named("1", "Resume.pdf")];
        assert_eq!(filter(&entries, "RESUME").len(), 1);
        assert_eq!(filter(&entries, "sumé").len(), 0);
        assert!(matches(&entries[0], ".PDF"));
    }

    #[test]
    fn test_unicode_lowercase() {
        let entries = vec![named("1", "ÉTÉ Photos")];
        assert_eq!(filter(&entries, "été").len(), 1);
    }

    #[test]
    fn test_keeps_order_of_matches() {
        let entries = vec![
            named("1", "notes-b.txt"),
            named("2", "photo.png"),
            named("3", "Notes-a.txt"),
        ];
        let ids: Vec<_> = filter(&entries, "notes").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_query_accessors() {
        let query = SearchQuery::new("Doc");
        assert_eq!(query.as_str(), "Doc");
        assert!(!query.is_empty());
        assert!(SearchQuery::default().is_empty());
    }
}
