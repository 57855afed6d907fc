//! Tests for collection tree loading.

use super::*;
use std::fs;

// ===== Test Helpers =====

fn write_request(dir: &Path, stem: &str, name: &str) -> PathBuf {
    let path = dir.join(format!("{stem}{FILE_SUFFIX}"));
    fs::write(&path, format!("name: {name}\nmethod: GET\nurl: https://example.com\n")).unwrap();
    path
}

fn fixture() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    let users = root.path().join("users");
    fs::create_dir(&users).unwrap();
    write_request(&users, "get-user", "Get user");
    write_request(&users, "delete-user", "Delete user");
    write_request(root.path(), "ping", "Ping");
    fs::write(root.path().join("notes.txt"), "not a request").unwrap();
    fs::create_dir(root.path().join(".git")).unwrap();
    root
}

// ===== load =====

#[test]
fn load_lists_directories_before_requests() {
    let root = fixture();
    let tree = CollectionTree::load(root.path()).unwrap();

    let names: Vec<&str> = tree.flatten().iter().map(|row| row.node.name.as_str()).collect();
    assert_eq!(names, vec!["users", "Delete user", "Get user", "Ping"]);
}

#[test]
fn load_records_depth() {
    let root = fixture();
    let tree = CollectionTree::load(root.path()).unwrap();

    let depths: Vec<usize> = tree.flatten().iter().map(|row| row.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 0]);
}

#[test]
fn load_skips_hidden_and_foreign_files() {
    let root = fixture();
    let tree = CollectionTree::load(root.path()).unwrap();

    assert!(
        tree.flatten()
            .iter()
            .all(|row| row.node.name != ".git" && row.node.name != "notes.txt"),
        "Hidden directories and non-request files should be skipped"
    );
    assert_eq!(tree.request_count(), 3);
}

#[test]
fn load_keeps_unparsable_request_under_stem() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join(format!("broken{FILE_SUFFIX}")),
        "name: [unterminated",
    )
    .unwrap();

    let tree = CollectionTree::load(root.path()).unwrap();
    let rows = tree.flatten();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].node.name, "broken");
    assert!(rows[0].node.request().is_none());
}

#[test]
fn load_fails_for_missing_root() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("nope");
    let err = CollectionTree::load(&missing).unwrap_err();
    assert!(matches!(err, CollectionError::Read { .. }));
}

#[test]
fn position_of_finds_request_by_path() {
    let root = fixture();
    let tree = CollectionTree::load(root.path()).unwrap();
    let ping = root.path().join(format!("ping{FILE_SUFFIX}"));

    assert_eq!(tree.position_of(&ping), Some(3));
    assert_eq!(tree.position_of(&root.path().join("missing")), None);
}

// ===== ParentNode =====

#[test]
fn parent_of_nothing_is_no_parent() {
    assert_eq!(ParentNode::for_node(None), ParentNode::NoParent);
}

#[test]
fn parent_of_pathless_node_is_without_path() {
    let node = CollectionNode {
        name: "virtual".to_string(),
        path: None,
        kind: NodeKind::Directory,
        children: Vec::new(),
    };
    assert_eq!(ParentNode::for_node(Some(&node)), ParentNode::WithoutPath);
    assert_eq!(ParentNode::WithoutPath.path(), None);
}

#[test]
fn parent_of_directory_is_itself() {
    let node = CollectionNode::directory("users", "/c/users");
    assert_eq!(
        ParentNode::for_node(Some(&node)),
        ParentNode::WithPath(PathBuf::from("/c/users"))
    );
}

#[test]
fn parent_of_request_is_containing_directory() {
    let node = CollectionNode {
        name: "Get user".to_string(),
        path: Some(PathBuf::from("/c/users/get-user.posting.yaml")),
        kind: NodeKind::Request(None),
        children: Vec::new(),
    };
    assert_eq!(
        ParentNode::for_node(Some(&node)).path(),
        Some(Path::new("/c/users"))
    );
}
