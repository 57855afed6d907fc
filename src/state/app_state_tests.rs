//! Tests for AppState transitions.

use super::*;
use crate::collection::{NodeKind, FILE_SUFFIX};
use std::fs;

// ===== Test Helpers =====

fn fixture() -> (tempfile::TempDir, CollectionTree) {
    let root = tempfile::tempdir().unwrap();
    let users = root.path().join("api").join("users");
    fs::create_dir_all(&users).unwrap();
    fs::write(users.join(format!("get-user{FILE_SUFFIX}")), "name: Get user\n").unwrap();
    fs::write(root.path().join(format!("ping{FILE_SUFFIX}")), "name: Ping\n").unwrap();
    let tree = CollectionTree::load(root.path()).unwrap();
    (root, tree)
}

fn empty_tree() -> CollectionTree {
    CollectionTree::from_root(CollectionNode::directory("root", "/tmp/root"))
}

// ===== Construction =====

#[test]
fn new_selects_first_row() {
    let (_root, tree) = fixture();
    let state = AppState::new(tree);
    assert_eq!(state.selected_row(), Some(0));
    assert_eq!(state.focus, FocusPane::Collection);
    assert!(state.modal.is_none());
}

#[test]
fn new_with_empty_collection_selects_nothing() {
    let state = AppState::new(empty_tree());
    assert_eq!(state.selected_row(), None);
    assert!(state.selected_node().is_none());
}

// ===== Selection =====

#[test]
fn selection_clamps_at_both_ends() {
    let (_root, tree) = fixture();
    // rows: api, users, Get user, Ping
    let mut state = AppState::new(tree);

    state.select_previous_row();
    assert_eq!(state.selected_row(), Some(0));

    for _ in 0..10 {
        state.select_next_row();
    }
    assert_eq!(state.selected_row(), Some(3));
    assert_eq!(state.selected_node().map(|n| n.name.as_str()), Some("Ping"));
}

#[test]
fn set_collection_clamps_selection() {
    let (_root, tree) = fixture();
    let mut state = AppState::new(tree);
    state.select_next_row();
    state.select_next_row();
    state.select_next_row();

    state.set_collection(empty_tree());
    assert_eq!(state.selected_row(), None);
}

#[test]
fn select_path_moves_to_node() {
    let (root, tree) = fixture();
    let mut state = AppState::new(tree);
    let ping = root.path().join(format!("ping{FILE_SUFFIX}"));

    assert!(state.select_path(&ping));
    assert_eq!(state.selected_node().map(|n| n.name.as_str()), Some("Ping"));
    assert!(!state.select_path(&root.path().join("missing")));
}

// ===== Focus =====

#[test]
fn focus_cycles_through_panes() {
    let mut state = AppState::new(empty_tree());
    state.focus_next();
    assert_eq!(state.focus, FocusPane::TabStrip);
    state.focus_next();
    assert_eq!(state.focus, FocusPane::TabBody);
    state.focus_next();
    assert_eq!(state.focus, FocusPane::Collection);
    state.focus_previous();
    assert_eq!(state.focus, FocusPane::TabBody);
}

#[test]
fn request_tab_order() {
    assert_eq!(RequestTab::Headers.next(), RequestTab::Body);
    assert_eq!(RequestTab::Info.next(), RequestTab::Headers);
    assert_eq!(RequestTab::Headers.previous(), RequestTab::Info);
    assert_eq!(RequestTab::Query.title(), "Query");
}

// ===== New request dialog =====

#[test]
fn initial_directory_for_nested_directory() {
    let (_root, tree) = fixture();
    let mut state = AppState::new(tree);
    state.select_next_row(); // users

    assert!(matches!(
        state.selected_node().map(|n| &n.kind),
        Some(NodeKind::Directory)
    ));
    assert_eq!(state.initial_directory(), "api/users");
}

#[test]
fn initial_directory_for_request_uses_its_directory() {
    let (_root, tree) = fixture();
    let mut state = AppState::new(tree);
    state.select_next_row();
    state.select_next_row(); // Get user

    assert_eq!(state.initial_directory(), "api/users");
}

#[test]
fn initial_directory_for_root_request_is_dot() {
    let (_root, tree) = fixture();
    let mut state = AppState::new(tree);
    for _ in 0..3 {
        state.select_next_row(); // Ping
    }
    assert_eq!(state.initial_directory(), ".");
}

#[test]
fn empty_collection_uses_root_as_parent() {
    let state = AppState::new(empty_tree());
    assert_eq!(
        state.new_request_parent(),
        ParentNode::WithPath(PathBuf::from("/tmp/root"))
    );
    assert_eq!(state.initial_directory(), ".");
}

#[test]
fn open_new_request_modal_prefills_directory() {
    let (root, tree) = fixture();
    let mut state = AppState::new(tree);
    state.select_next_row();

    state.open_new_request_modal();

    let modal = state.modal.as_ref().expect("modal should be open");
    assert_eq!(
        modal.field(crate::state::FieldId::Directory).value(),
        "api/users"
    );
    assert_eq!(
        modal.parent(),
        &ParentNode::WithPath(root.path().join("api").join("users"))
    );
}
