//! Tests for tab navigation handler.
//!
//! - NextTab moves to next tab (with wrapping)
//! - PreviousTab moves to previous tab (with wrapping)
//! - Both respect focus (only work when the tab strip is focused)

use super::*;
use crate::collection::CollectionTree;
use crate::collection::CollectionNode;
use crate::state::RequestTab;

// ===== Test Helpers =====

fn state_with_focus(focus: FocusPane) -> AppState {
    let tree = CollectionTree::from_root(CollectionNode::directory("root", "/tmp/root"));
    let mut state = AppState::new(tree);
    state.focus = focus;
    state
}

// ===== NextTab tests =====

#[test]
fn next_tab_moves_to_next_tab() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    state.selected_tab = RequestTab::Headers;

    let changed = handle_tab_action(&mut state, KeyAction::NextTab);

    assert!(changed);
    assert_eq!(
        state.selected_tab,
        RequestTab::Body,
        "NextTab should move exactly one tab"
    );
}

#[test]
fn next_tab_wraps_from_last_to_first() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    state.selected_tab = RequestTab::Info;

    handle_tab_action(&mut state, KeyAction::NextTab);

    assert_eq!(state.selected_tab, RequestTab::Headers);
}

#[test]
fn next_tab_does_nothing_when_collection_focused() {
    let mut state = state_with_focus(FocusPane::Collection);
    state.selected_tab = RequestTab::Headers;

    let changed = handle_tab_action(&mut state, KeyAction::NextTab);

    assert!(!changed);
    assert_eq!(
        state.selected_tab,
        RequestTab::Headers,
        "NextTab should be a no-op without tab strip focus"
    );
}

#[test]
fn next_tab_does_nothing_when_tab_body_focused() {
    let mut state = state_with_focus(FocusPane::TabBody);
    state.selected_tab = RequestTab::Body;

    handle_tab_action(&mut state, KeyAction::NextTab);

    assert_eq!(state.selected_tab, RequestTab::Body);
}

// ===== PreviousTab tests =====

#[test]
fn previous_tab_moves_to_previous_tab() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    state.selected_tab = RequestTab::Query;

    handle_tab_action(&mut state, KeyAction::PreviousTab);

    assert_eq!(state.selected_tab, RequestTab::Body);
}

#[test]
fn previous_tab_wraps_from_first_to_last() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    state.selected_tab = RequestTab::Headers;

    handle_tab_action(&mut state, KeyAction::PreviousTab);

    assert_eq!(state.selected_tab, RequestTab::Info);
}

#[test]
fn previous_tab_does_nothing_when_not_focused() {
    let mut state = state_with_focus(FocusPane::Collection);
    state.selected_tab = RequestTab::Query;

    handle_tab_action(&mut state, KeyAction::PreviousTab);

    assert_eq!(state.selected_tab, RequestTab::Query);
}

// ===== Other actions =====

#[test]
fn unrelated_action_is_ignored() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    state.selected_tab = RequestTab::Body;

    assert!(!handle_tab_action(&mut state, KeyAction::MoveDown));
    assert_eq!(state.selected_tab, RequestTab::Body);
}

#[test]
fn full_cycle_returns_to_start() {
    let mut state = state_with_focus(FocusPane::TabStrip);
    let start = state.selected_tab;
    for _ in 0..RequestTab::ALL.len() {
        handle_tab_action(&mut state, KeyAction::NextTab);
    }
    assert_eq!(state.selected_tab, start);
}
