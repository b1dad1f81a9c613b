//! File and folder entry types.

use std::fmt;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::TreeError;
use crate::navigation::Crumb;

/// Unique, stable identifier for an entry.
///
/// The empty id is reserved for the synthetic drive root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub CompactString);

impl EntryId {
    /// Create a new EntryId.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// The reserved id of the drive root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Check if this is the reserved root id.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Kind of an entry as shown to the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Folder,
    Document,
    Image,
    Video,
    Audio,
    Archive,
    Other,
}

impl EntryKind {
    /// Check if this is a folder.
    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }

    /// Leaf kind for this entry kind, `None` for folders.
    pub fn file_kind(self) -> Option<FileKind> {
        match self {
            EntryKind::Folder => None,
            EntryKind::Document => Some(FileKind::Document),
            EntryKind::Image => Some(FileKind::Image),
            EntryKind::Video => Some(FileKind::Video),
            EntryKind::Audio => Some(FileKind::Audio),
            EntryKind::Archive => Some(FileKind::Archive),
            EntryKind::Other => Some(FileKind::Other),
        }
    }
}

/// Kind of a non-folder entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileKind {
    Document,
    Image,
    Video,
    Audio,
    Archive,
    Other,
}

impl From<FileKind> for EntryKind {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Document => EntryKind::Document,
            FileKind::Image => EntryKind::Image,
            FileKind::Video => EntryKind::Video,
            FileKind::Audio => EntryKind::Audio,
            FileKind::Archive => EntryKind::Archive,
            FileKind::Other => EntryKind::Other,
        }
    }
}

/// Last modification of an entry.
///
/// Either an absolute timestamp or a preformatted relative descriptor
/// such as `"2 days ago"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Modified {
    At(DateTime<Utc>),
    Relative(CompactString),
}

impl Modified {
    /// Create a relative-time descriptor.
    pub fn relative(descriptor: impl Into<CompactString>) -> Self {
        Modified::Relative(descriptor.into())
    }

    /// Create an absolute timestamp.
    pub fn at(time: DateTime<Utc>) -> Self {
        Modified::At(time)
    }

    /// Describe the modification time relative to `now`.
    pub fn describe(&self, now: DateTime<Utc>) -> String {
        match self {
            Modified::Relative(descriptor) => descriptor.to_string(),
            Modified::At(time) => {
                let secs = now.signed_duration_since(*time).num_seconds();
                if secs < 60 {
                    return "just now".to_string();
                }
                let (count, unit) = match secs {
                    s if s < 3_600 => (s / 60, "minute"),
                    s if s < 86_400 => (s / 3_600, "hour"),
                    s if s < 604_800 => (s / 86_400, "day"),
                    s if s < 2_592_000 => (s / 604_800, "week"),
                    s if s < 31_536_000 => (s / 2_592_000, "month"),
                    s => (s / 31_536_000, "year"),
                };
                let plural = if count == 1 { "" } else { "s" };
                format!("{count} {unit}{plural} ago")
            }
        }
    }
}

impl fmt::Display for Modified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Utc::now()))
    }
}

/// Folder or file payload of an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryNode {
    /// Folder. `None` children means the folder has not been loaded.
    Folder { children: Option<Vec<FileEntry>> },
    /// Non-folder entry.
    File {
        kind: FileKind,
        /// Size in bytes, if known.
        size: Option<u64>,
        /// Link target, if any.
        url: Option<String>,
    },
}

/// A single file or folder in the drive tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct FileEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// Display name, not unique among siblings.
    pub name: CompactString,
    /// Last modification.
    pub modified: Modified,
    /// Folder or file payload.
    pub node: EntryNode,
}

impl FileEntry {
    /// Create a folder with loaded children.
    pub fn folder(
        id: impl Into<EntryId>,
        name: impl Into<CompactString>,
        modified: Modified,
        children: Vec<FileEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modified,
            node: EntryNode::Folder {
                children: Some(children),
            },
        }
    }

    /// Create a folder whose children have not been loaded.
    pub fn unloaded_folder(
        id: impl Into<EntryId>,
        name: impl Into<CompactString>,
        modified: Modified,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modified,
            node: EntryNode::Folder { children: None },
        }
    }

    /// Create a non-folder entry.
    pub fn file(
        id: impl Into<EntryId>,
        name: impl Into<CompactString>,
        kind: FileKind,
        size: Option<u64>,
        modified: Modified,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modified,
            node: EntryNode::File {
                kind,
                size,
                url: None,
            },
        }
    }

    /// Attach a link target. Has no effect on folders.
    pub fn with_url(mut self, link: impl Into<String>) -> Self {
        if let EntryNode::File { url, .. } = &mut self.node {
            *url = Some(link.into());
        }
        self
    }

    /// Get the entry kind.
    pub fn kind(&self) -> EntryKind {
        match &self.node {
            EntryNode::Folder { .. } => EntryKind::Folder,
            EntryNode::File { kind, .. } => (*kind).into(),
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.node, EntryNode::Folder { .. })
    }

    /// Check if this entry is a non-folder.
    pub fn is_file(&self) -> bool {
        !self.is_folder()
    }

    /// Children of a folder, `None` for files and unloaded folders.
    pub fn children(&self) -> Option<&[FileEntry]> {
        match &self.node {
            EntryNode::Folder { children } => children.as_deref(),
            EntryNode::File { .. } => None,
        }
    }

    /// Check if a folder's children are available. Always false for files.
    pub fn is_loaded(&self) -> bool {
        matches!(&self.node, EntryNode::Folder { children: Some(_) })
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children().map_or(0, <[FileEntry]>::len)
    }

    /// Size in bytes, always `None` for folders.
    pub fn size(&self) -> Option<u64> {
        match &self.node {
            EntryNode::File { size, .. } => *size,
            EntryNode::Folder { .. } => None,
        }
    }

    /// Human-readable size, if known.
    pub fn size_label(&self) -> Option<String> {
        self.size().map(format_size)
    }

    /// Link target of a file.
    pub fn url(&self) -> Option<&str> {
        match &self.node {
            EntryNode::File { url, .. } => url.as_deref(),
            EntryNode::Folder { .. } => None,
        }
    }

    /// Breadcrumb segment for this entry.
    pub fn crumb(&self) -> Crumb {
        Crumb::new(self.id.clone(), self.name.clone())
    }
}

/// Format a byte size in human-readable form, in decimal units with at
/// most one decimal place.
pub fn format_size(bytes: u64) -> String {
    let options = humansize::FormatSizeOptions::from(humansize::DECIMAL).decimal_places(1);
    humansize::format_size(bytes, options)
}

/// Flat wire shape of an entry, as found in exported JSON trees.
#[derive(Serialize, Deserialize)]
struct RawEntry {
    id: EntryId,
    name: CompactString,
    #[serde(rename = "type")]
    kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    modified: Modified,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<FileEntry>>,
}

impl TryFrom<RawEntry> for FileEntry {
    type Error = TreeError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let node = match raw.kind.file_kind() {
            None => {
                if raw.size.is_some() || raw.url.is_some() {
                    return Err(TreeError::invalid_entry(
                        &raw.id,
                        "folders cannot carry a size or url",
                    ));
                }
                EntryNode::Folder {
                    children: raw.children,
                }
            }
            Some(kind) => {
                if raw.children.is_some() {
                    return Err(TreeError::invalid_entry(
                        &raw.id,
                        format!("a {kind} cannot have children"),
                    ));
                }
                EntryNode::File {
                    kind,
                    size: raw.size,
                    url: raw.url,
                }
            }
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            modified: raw.modified,
            node,
        })
    }
}

impl From<FileEntry> for RawEntry {
    fn from(entry: FileEntry) -> Self {
        let kind = entry.kind();
        let (size, url, children) = match entry.node {
            EntryNode::Folder { children } => (None, None, children),
            EntryNode::File { size, url, .. } => (size, url, None),
        };
        Self {
            id: entry.id,
            name: entry.name,
            kind,
            size,
            modified: entry.modified,
            url,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_root_id() {
        assert!(EntryId::root().is_root());
        assert!(!EntryId::new("1").is_root());
    }

    #[test]
    fn test_kind_follows_node() {
        let folder = FileEntry::folder("1", "Docs", Modified::relative("today"), vec![]);
        assert_eq!(folder.kind(), EntryKind::Folder);
        assert!(folder.is_loaded());
        assert_eq!(folder.size(), None);

        let file = FileEntry::file(
            "2",
            "a.mp3",
            FileKind::Audio,
            Some(10),
            Modified::relative("today"),
        );
        assert_eq!(file.kind(), EntryKind::Audio);
        assert!(file.children().is_none());
        assert!(!file.is_loaded());
    }

    #[test]
    fn test_with_url_ignored_on_folder() {
        let folder = FileEntry::unloaded_folder("1", "Docs", Modified::relative("today"))
            .with_url("#");
        assert_eq!(folder.url(), None);
        assert!(!folder.is_loaded());
        assert_eq!(folder.child_count(), 0);
    }

    #[test]
    fn test_describe_absolute_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let describe = |d: Duration| Modified::at(now - d).describe(now);

        assert_eq!(describe(Duration::seconds(10)), "just now");
        assert_eq!(describe(Duration::minutes(1)), "1 minute ago");
        assert_eq!(describe(Duration::hours(5)), "5 hours ago");
        assert_eq!(describe(Duration::days(2)), "2 days ago");
        assert_eq!(describe(Duration::weeks(3)), "3 weeks ago");
        assert_eq!(describe(Duration::days(400)), "1 year ago");
        assert_eq!(Modified::at(now + Duration::hours(1)).describe(now), "just now");
    }

    #[test]
    fn test_kind_strum_names() {
        assert_eq!(EntryKind::Archive.to_string(), "archive");
        assert_eq!("video".parse::<EntryKind>().unwrap(), EntryKind::Video);
        assert_eq!(EntryKind::Folder.file_kind(), None);
    }
}
