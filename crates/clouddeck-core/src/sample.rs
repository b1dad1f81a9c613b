//! Built-in sample drive.

use crate::entry::{FileEntry, FileKind, Modified};
use crate::error::TreeError;
use crate::store::TreeStore;

/// Top-level entries of the sample drive.
pub fn sample_entries() -> Vec<FileEntry> {
    let ago = Modified::relative;

    vec![
        FileEntry::folder(
            "1",
            "Documents",
            ago("2 days ago"),
            vec![
                FileEntry::file(
                    "1-1",
                    "Resume.pdf",
                    FileKind::Document,
                    Some(245_000),
                    ago("1 week ago"),
                )
                .with_url("#"),
                FileEntry::file(
                    "1-2",
                    "Project Proposal.docx",
                    FileKind::Document,
                    Some(1_200_000),
                    ago("3 days ago"),
                )
                .with_url("#"),
                FileEntry::folder(
                    "1-3",
                    "Meeting Notes",
                    ago("1 day ago"),
                    vec![
                        FileEntry::file(
                            "1-3-1",
                            "Q1 Planning.txt",
                            FileKind::Document,
                            Some(12_000),
                            ago("1 day ago"),
                        )
                        .with_url("#"),
                    ],
                ),
            ],
        ),
        FileEntry::folder(
            "2",
            "Photos",
            ago("1 week ago"),
            vec![
                FileEntry::file(
                    "2-1",
                    "vacation-2024.jpg",
                    FileKind::Image,
                    Some(2_400_000),
                    ago("1 week ago"),
                )
                .with_url("#"),
                FileEntry::file(
                    "2-2",
                    "profile-pic.png",
                    FileKind::Image,
                    Some(856_000),
                    ago("2 weeks ago"),
                )
                .with_url("#"),
            ],
        ),
        FileEntry::folder(
            "3",
            "Videos",
            ago("3 weeks ago"),
            vec![
                FileEntry::file(
                    "3-1",
                    "presentation-demo.mp4",
                    FileKind::Video,
                    Some(45_000_000),
                    ago("3 weeks ago"),
                )
                .with_url("#"),
            ],
        ),
        FileEntry::file(
            "4",
            "Budget Spreadsheet.xlsx",
            FileKind::Document,
            Some(89_000),
            ago("5 days ago"),
        )
        .with_url("#"),
        FileEntry::file(
            "5",
            "Music Collection.zip",
            FileKind::Archive,
            Some(156_000_000),
            ago("1 month ago"),
        )
        .with_url("#"),
        FileEntry::file(
            "6",
            "background-music.mp3",
            FileKind::Audio,
            Some(4_200_000),
            ago("2 weeks ago"),
        )
        .with_url("#"),
    ]
}

/// The sample drive as a store with the given root label.
pub fn sample_store(root_label: &str) -> Result<TreeStore, TreeError> {
    TreeStore::new(sample_entries(), root_label)
}
