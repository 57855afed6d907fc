//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions
//! here are pure; disk access happens in `integration`.

use std::path::{Path, PathBuf};

use crate::collection::{CollectionNode, CollectionTree, ParentNode};
use crate::model::{Notification, Notifications};
use crate::state::NewRequestModal;

// ===== FocusPane =====

/// Which region of the screen receives keyboard input.
///
/// Cycles Collection → TabStrip → TabBody → Collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The collection list on the left.
    #[default]
    Collection,
    /// The tab bar of the request pane.
    TabStrip,
    /// The content under the selected tab.
    TabBody,
}

impl FocusPane {
    /// Following pane, wrapping to the collection.
    pub fn next(self) -> Self {
        match self {
            Self::Collection => Self::TabStrip,
            Self::TabStrip => Self::TabBody,
            Self::TabBody => Self::Collection,
        }
    }

    /// Preceding pane, wrapping to the tab body.
    pub fn previous(self) -> Self {
        match self {
            Self::Collection => Self::TabBody,
            Self::TabStrip => Self::Collection,
            Self::TabBody => Self::TabStrip,
        }
    }

    /// Whether this pane belongs to the tabbed request view.
    pub fn is_request_pane(self) -> bool {
        matches!(self, Self::TabStrip | Self::TabBody)
    }
}

// ===== RequestTab =====

/// Tabs of the request pane, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTab {
    /// Header rows of the selected request.
    #[default]
    Headers,
    /// Request body.
    Body,
    /// Query parameters.
    Query,
    /// Name, description and file location.
    Info,
}

impl RequestTab {
    /// Every tab, in display order.
    pub const ALL: [RequestTab; 4] = [Self::Headers, Self::Body, Self::Query, Self::Info];

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Headers => "Headers",
            Self::Body => "Body",
            Self::Query => "Query",
            Self::Info => "Info",
        }
    }

    /// Position in [`Self::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Following tab, wrapping to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping to the last.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: Collection ⇄ TabStrip ⇄ TabBody (via `focus_next` / `focus_previous`)
/// - **Modal**: closed → open (`open_new_request_modal`) → closed (when the
///   dialog reports a result)
#[derive(Debug, Clone)]
pub struct AppState {
    collection: CollectionTree,

    /// Index into `collection.flatten()`. `None` when the collection is empty.
    selected_row: Option<usize>,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Tab shown in the request pane.
    pub selected_tab: RequestTab,

    /// The new-request dialog, while open. Captures all key input.
    pub modal: Option<NewRequestModal>,

    /// Transient messages shown over the UI.
    pub notifications: Notifications,
}

impl AppState {
    /// Create new AppState for a loaded collection, selecting the first row.
    pub fn new(collection: CollectionTree) -> Self {
        let selected_row = if collection.flatten().is_empty() {
            None
        } else {
            Some(0)
        };
        Self {
            collection,
            selected_row,
            focus: FocusPane::default(),
            selected_tab: RequestTab::default(),
            modal: None,
            notifications: Notifications::new(),
        }
    }

    /// The loaded collection.
    pub fn collection(&self) -> &CollectionTree {
        &self.collection
    }

    /// Replace the collection (after a reload), keeping the selection in range.
    pub fn set_collection(&mut self, collection: CollectionTree) {
        let rows = collection.flatten().len();
        self.collection = collection;
        self.selected_row = match (self.selected_row, rows) {
            (_, 0) => None,
            (Some(row), _) => Some(row.min(rows - 1)),
            (None, _) => Some(0),
        };
    }

    /// Selected row of the flattened tree.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Select the row showing the node stored at `path`, if present.
    pub fn select_path(&mut self, path: &Path) -> bool {
        match self.collection.position_of(path) {
            Some(row) => {
                self.selected_row = Some(row);
                true
            }
            None => false,
        }
    }

    /// Node on the selected row.
    pub fn selected_node(&self) -> Option<&CollectionNode> {
        let row = self.selected_row?;
        self.collection.flatten().get(row).map(|r| r.node)
    }

    /// Move the collection selection up, clamping at the first row.
    pub fn select_previous_row(&mut self) {
        if let Some(row) = self.selected_row {
            self.selected_row = Some(row.saturating_sub(1));
        }
    }

    /// Move the collection selection down, clamping at the last row.
    pub fn select_next_row(&mut self) {
        let rows = self.collection.flatten().len();
        if rows == 0 {
            return;
        }
        self.selected_row = Some(match self.selected_row {
            Some(row) => (row + 1).min(rows - 1),
            None => 0,
        });
    }

    /// Move focus to the next pane.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous pane.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Parent directory for a request created from the current selection.
    ///
    /// Without a selection the collection root is the parent.
    pub fn new_request_parent(&self) -> ParentNode {
        match self.selected_node() {
            Some(node) => ParentNode::for_node(Some(node)),
            None => ParentNode::for_node(Some(self.collection.root())),
        }
    }

    /// Directory field default: the parent relative to the collection root.
    ///
    /// The root itself is written as `.`.
    pub fn initial_directory(&self) -> String {
        let parent = self.new_request_parent();
        let (Some(parent), Some(root)) = (parent.path(), self.collection.root_path()) else {
            return ".".to_string();
        };
        match parent.strip_prefix(root) {
            Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => ".".to_string(),
        }
    }

    /// Open the new-request dialog for the current selection.
    ///
    /// No-op if a dialog is already open.
    pub fn open_new_request_modal(&mut self) {
        if self.modal.is_some() {
            return;
        }
        self.modal = Some(NewRequestModal::new(
            self.initial_directory(),
            "",
            "",
            self.new_request_parent(),
        ));
    }

    /// Show a notification.
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Collection root on disk, if the tree is backed by one.
    pub fn root_path(&self) -> Option<PathBuf> {
        self.collection.root_path().map(Path::to_path_buf)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
