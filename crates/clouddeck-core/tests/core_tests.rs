use std::io::Write;
use std::sync::Arc;

use clouddeck_core::sample::sample_store;
use clouddeck_core::search::filter;
use clouddeck_core::{
    Crumb, EntryId, EntryKind, FileEntry, FileKind, InvalidOperation, Modified, NavError,
    Navigator, TreeError, TreeStore,
};

fn sample() -> Arc<TreeStore> {
    Arc::new(sample_store("My Drive").unwrap())
}

fn id(s: &str) -> EntryId {
    EntryId::new(s)
}

fn names(entries: &[FileEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn crumb_names(path: &[Crumb]) -> Vec<&str> {
    path.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_sample_tree_shape() {
    let store = sample();
    assert_eq!(store.root().len(), 6);
    assert_eq!(store.len(), 13);

    let stats = store.stats();
    assert_eq!(stats.total_folders, 4);
    assert_eq!(stats.total_files, 9);
    assert_eq!(stats.max_depth, 3);

    let kinds: Vec<EntryKind> = store.root().iter().map(FileEntry::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Folder,
            EntryKind::Folder,
            EntryKind::Folder,
            EntryKind::Document,
            EntryKind::Archive,
            EntryKind::Audio,
        ]
    );
}

#[test]
fn test_enter_folder_yields_its_children() {
    let store = sample();
    for (_, entry) in store.walk().filter(|(_, e)| e.is_folder()) {
        let mut nav = Navigator::new(Arc::clone(&store));
        let trail = store.trail_to(&entry.id).unwrap();
        let parent = &trail[trail.len() - 2];
        nav.reveal(&parent.id).unwrap();

        nav.enter_folder(entry).unwrap();
        assert_eq!(nav.current_children(), entry.children().unwrap());
    }
}

#[test]
fn test_documents_scenario() {
    let store = sample();
    let mut nav = Navigator::new(Arc::clone(&store));

    let documents = store.get(&id("1")).unwrap();
    nav.enter_folder(documents).unwrap();
    assert_eq!(
        names(nav.current_children()),
        vec!["Resume.pdf", "Project Proposal.docx", "Meeting Notes"]
    );

    let meeting_notes = store.get(&id("1-3")).unwrap();
    nav.enter_folder(meeting_notes).unwrap();
    assert_eq!(names(nav.current_children()), vec!["Q1 Planning.txt"]);

    nav.jump_to_segment(0).unwrap();
    assert_eq!(crumb_names(nav.current_path()), vec!["My Drive"]);
    assert_eq!(nav.current_children().len(), 6);
    assert_eq!(nav.current_children(), store.root());
}

#[test]
fn test_jump_to_intermediate_segment() {
    let store = sample();
    let mut nav = Navigator::new(Arc::clone(&store));
    nav.enter(&id("1")).unwrap();
    nav.enter(&id("1-3")).unwrap();
    assert_eq!(nav.current_path().len(), 3);

    nav.jump_to_segment(1).unwrap();
    assert_eq!(crumb_names(nav.current_path()), vec!["My Drive", "Documents"]);
    assert_eq!(
        names(nav.current_children()),
        vec!["Resume.pdf", "Project Proposal.docx", "Meeting Notes"]
    );
}

#[test]
fn test_jump_matches_resolve_for_every_index() {
    let store = sample();
    let mut nav = Navigator::new(Arc::clone(&store));
    nav.enter(&id("1")).unwrap();
    nav.enter(&id("1-3")).unwrap();
    let full = nav.state().ids();

    for index in 0..full.len() {
        let mut nav = nav.clone();
        nav.jump_to_segment(index).unwrap();
        assert_eq!(nav.current_path().len(), index + 1);
        assert_eq!(
            nav.current_children(),
            store.resolve(&full[..=index]).unwrap()
        );
    }
}

#[test]
fn test_jump_out_of_range_leaves_state() {
    let mut nav = Navigator::new(sample());
    nav.enter(&id("2")).unwrap();
    let before = nav.state().clone();

    for index in [2, 3, usize::MAX] {
        let err = nav.jump_to_segment(index).unwrap_err();
        assert!(matches!(
            err,
            NavError::InvalidOperation(InvalidOperation::SegmentOutOfRange { len: 2, .. })
        ));
        assert_eq!(nav.state(), &before);
    }
}

#[test]
fn test_enter_non_folder_leaves_state() {
    let store = sample();
    let mut nav = Navigator::new(Arc::clone(&store));
    let before = nav.state().clone();

    let budget = store.get(&id("4")).unwrap();
    let err = nav.enter_folder(budget).unwrap_err();
    assert!(matches!(
        err,
        NavError::InvalidOperation(InvalidOperation::NotAFolder { .. })
    ));
    assert_eq!(nav.state(), &before);

    let err = nav.enter(&id("5")).unwrap_err();
    assert!(err.is_invalid_operation());
    assert_eq!(nav.state(), &before);
}

#[test]
fn test_resolve_rejects_bad_paths() {
    let store = sample();
    let root = EntryId::root();

    assert!(store.resolve(&[]).unwrap_err().is_not_found());
    assert!(store.resolve(&[id("1")]).unwrap_err().is_not_found());
    // Missing id
    assert!(store.resolve(&[root.clone(), id("9")]).unwrap_err().is_not_found());
    // Not a folder
    assert!(store.resolve(&[root.clone(), id("4")]).unwrap_err().is_not_found());
    // Exists but not at that position
    assert!(store.resolve(&[root.clone(), id("1-3")]).unwrap_err().is_not_found());
    assert!(
        store
            .resolve(&[root.clone(), id("2"), id("1-3")])
            .unwrap_err()
            .is_not_found()
    );

    assert_eq!(store.resolve(&[root.clone()]).unwrap(), store.root());
    assert_eq!(
        names(store.resolve(&[root, id("1"), id("1-3")]).unwrap()),
        vec!["Q1 Planning.txt"]
    );
}

#[test]
fn test_trail_resolves_to_folder_children() {
    let store = sample();
    let trail = store.trail_to(&id("1-3")).unwrap();
    assert_eq!(crumb_names(&trail), vec!["My Drive", "Documents", "Meeting Notes"]);

    let ids: Vec<EntryId> = trail.into_iter().map(|c| c.id).collect();
    let folder = store.get(&id("1-3")).unwrap();
    assert_eq!(store.resolve(&ids).unwrap(), folder.children().unwrap());

    assert!(store.trail_to(&id("missing")).is_none());
}

#[test]
fn test_search_after_navigation() {
    let mut nav = Navigator::new(sample());
    nav.enter(&id("1")).unwrap();

    let hits = filter(nav.current_children(), "RESUME");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Resume.pdf");

    // Not recursive: the file inside Meeting Notes is not found from Documents
    assert!(filter(nav.current_children(), "planning").is_empty());
    assert_eq!(filter(nav.current_children(), "").len(), 3);
}

#[test]
fn test_json_round_trip_shape() {
    let store = sample();
    let json = serde_json::to_string(store.root()).unwrap();
    assert!(json.contains(r#""type":"folder""#));
    assert!(!json.contains(r#""children":null"#));

    let reloaded = TreeStore::from_json_str(&json, "My Drive").unwrap();
    assert_eq!(reloaded.root(), store.root());
}

#[test]
fn test_json_rejects_children_on_file() {
    let json = r#"[{
        "id": "1", "name": "a.txt", "type": "document",
        "modified": "today", "children": []
    }]"#;
    let err = TreeStore::from_json_str(json, "My Drive").unwrap_err();
    assert!(matches!(err, TreeError::Parse { .. }));
    assert!(err.to_string().contains("cannot have children"));
}

#[test]
fn test_json_rejects_size_on_folder() {
    let json = r#"[{
        "id": "1", "name": "Documents", "type": "folder", "size": 5,
        "modified": "today", "children": []
    }]"#;
    let err = TreeStore::from_json_str(json, "My Drive").unwrap_err();
    assert!(matches!(err, TreeError::Parse { .. }));
    assert!(err.to_string().contains("folders cannot carry a size or url"));
}

#[test]
fn test_json_rejects_url_on_folder() {
    let json = r#"[{
        "id": "1", "name": "Documents", "type": "folder", "url": "https://example.com",
        "modified": "today"
    }]"#;
    let err = TreeStore::from_json_str(json, "My Drive").unwrap_err();
    assert!(matches!(err, TreeError::Parse { .. }));
    assert!(err.to_string().contains("folders cannot carry a size or url"));
}

#[test]
fn test_json_folder_without_children_is_unloaded() {
    let json = r#"[
        {"id": "1", "name": "Later", "type": "folder", "modified": "2024-05-01T10:00:00Z"}
    ]"#;
    let store = TreeStore::from_json_str(json, "My Drive").unwrap();
    let folder = store.get(&id("1")).unwrap();
    assert!(folder.is_folder());
    assert!(!folder.is_loaded());
    assert!(matches!(folder.modified, Modified::At(_)));

    let mut nav = Navigator::new(Arc::new(store));
    nav.enter(&id("1")).unwrap();
    assert!(nav.current_children().is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "x", "name": "Clip.mov", "type": "video", "size": 42, "modified": "now"}}]"#
    )
    .unwrap();

    let store = TreeStore::from_path(file.path(), "Shared Drive").unwrap();
    assert_eq!(store.root_label(), "Shared Drive");
    let clip = store.get(&id("x")).unwrap();
    assert_eq!(clip.kind(), EntryKind::Video);
    assert_eq!(clip.size(), Some(42));

    let err = TreeStore::from_path("/nonexistent/tree.json", "My Drive").unwrap_err();
    assert!(matches!(err, TreeError::Io { .. }));
}

#[test]
fn test_duplicate_names_are_distinct_entries() {
    let now = || Modified::relative("now");
    let entries = vec![
        FileEntry::folder("a", "Copy", now(), vec![FileEntry::file("a1", "x", FileKind::Other, None, now())]),
        FileEntry::folder("b", "Copy", now(), vec![]),
    ];
    let mut nav = Navigator::new(Arc::new(TreeStore::new(entries, "My Drive").unwrap()));

    nav.enter(&id("b")).unwrap();
    assert!(nav.current_children().is_empty());
    nav.jump_to_segment(0).unwrap();
    nav.enter(&id("a")).unwrap();
    assert_eq!(nav.current_children().len(), 1);
}
