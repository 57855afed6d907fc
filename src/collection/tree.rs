//! In-memory view of a collection directory.
//!
//! A collection is a directory tree whose leaves are `*.posting.yaml` request
//! files. The tree is loaded eagerly and reloaded after every write.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::files::FILE_SUFFIX;
use crate::model::{CollectionError, RequestFile};

/// What a node in the collection tree represents.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A directory that may contain requests and further directories.
    Directory,
    /// A request file. `None` when the file could not be parsed.
    Request(Option<RequestFile>),
}

/// A node in the collection tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionNode {
    /// Display name: the directory name or the request's `name` field.
    pub name: String,
    /// On-disk location, if the node is backed by one.
    pub path: Option<PathBuf>,
    /// Directory or request.
    pub kind: NodeKind,
    /// Child nodes, directories first. Always empty for requests.
    pub children: Vec<CollectionNode>,
}

impl CollectionNode {
    /// Directory node backed by `path`.
    pub fn directory(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            kind: NodeKind::Directory,
            children: Vec::new(),
        }
    }

    /// True for directory nodes.
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    /// Parsed request document, if this is a readable request node.
    pub fn request(&self) -> Option<&RequestFile> {
        match &self.kind {
            NodeKind::Request(file) => file.as_ref(),
            NodeKind::Directory => None,
        }
    }
}

/// The directory that a new request created "at" a node would be checked against.
///
/// Makes the two levels of absence explicit: no node at all, or a node that
/// isn't backed by an on-disk location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentNode {
    /// No parent node was supplied.
    NoParent,
    /// A parent node exists but has no on-disk path.
    WithoutPath,
    /// A parent directory on disk.
    WithPath(PathBuf),
}

impl ParentNode {
    /// Resolve the parent directory for a node.
    ///
    /// Directories are their own parent; requests resolve to the directory
    /// that contains them.
    pub fn for_node(node: Option<&CollectionNode>) -> Self {
        let Some(node) = node else {
            return Self::NoParent;
        };
        match (&node.kind, &node.path) {
            (_, None) => Self::WithoutPath,
            (NodeKind::Directory, Some(path)) => Self::WithPath(path.clone()),
            (NodeKind::Request(_), Some(path)) => match path.parent() {
                Some(parent) => Self::WithPath(parent.to_path_buf()),
                None => Self::WithoutPath,
            },
        }
    }

    /// The on-disk directory, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::WithPath(path) => Some(path),
            Self::NoParent | Self::WithoutPath => None,
        }
    }
}

/// One visible row of the flattened tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    /// Nesting depth, 0 for direct children of the root.
    pub depth: usize,
    /// The node shown on this row.
    pub node: &'a CollectionNode,
}

/// The loaded collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionTree {
    root: CollectionNode,
}

impl CollectionTree {
    /// Load the collection rooted at `root`.
    ///
    /// Hidden entries (names starting with `.`) are skipped. Request files
    /// that fail to parse are logged and listed under their file stem.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Read`] if a directory cannot be listed.
    pub fn load(root: &Path) -> Result<Self, CollectionError> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let mut node = CollectionNode::directory(name, root);
        node.children = load_children(root)?;
        debug!(root = %root.display(), "Collection loaded");
        Ok(Self { root: node })
    }

    /// Build a tree from an already constructed root node.
    pub fn from_root(root: CollectionNode) -> Self {
        Self { root }
    }

    /// The root directory node.
    pub fn root(&self) -> &CollectionNode {
        &self.root
    }

    /// On-disk root directory of the collection.
    pub fn root_path(&self) -> Option<&Path> {
        self.root.path.as_deref()
    }

    /// Depth-first list of every node below the root, in display order.
    pub fn flatten(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        push_rows(&self.root.children, 0, &mut rows);
        rows
    }

    /// Index in [`flatten`](Self::flatten) of the node stored at `path`.
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.flatten()
            .iter()
            .position(|row| row.node.path.as_deref() == Some(path))
    }

    /// Number of request files anywhere in the tree.
    pub fn request_count(&self) -> usize {
        self.flatten()
            .iter()
            .filter(|row| !row.node.is_directory())
            .count()
    }
}

fn push_rows<'a>(nodes: &'a [CollectionNode], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
    for node in nodes {
        rows.push(TreeRow { depth, node });
        push_rows(&node.children, depth + 1, rows);
    }
}

fn load_children(dir: &Path) -> Result<Vec<CollectionNode>, CollectionError> {
    let read_error = |source: std::io::Error| CollectionError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut children = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            let mut node = CollectionNode::directory(file_name, &path);
            node.children = load_children(&path)?;
            children.push(node);
        } else if let Some(stem) = file_name.strip_suffix(FILE_SUFFIX) {
            children.push(load_request(&path, stem));
        }
    }

    children.sort_by(compare_nodes);
    Ok(children)
}

fn load_request(path: &Path, stem: &str) -> CollectionNode {
    let parsed = std::fs::read_to_string(path)
        .map_err(|source| CollectionError::Read {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|contents| {
            serde_yaml::from_str::<RequestFile>(&contents).map_err(|source| {
                CollectionError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })
        });

    let file = match parsed {
        Ok(file) => Some(file),
        Err(err) => {
            warn!("Skipping unreadable request: {}", err);
            None
        }
    };

    let name = match &file {
        Some(file) if !file.name.is_empty() => file.name.clone(),
        _ => stem.to_string(),
    };

    CollectionNode {
        name,
        path: Some(path.to_path_buf()),
        kind: NodeKind::Request(file),
        children: Vec::new(),
    }
}

/// Directories first, then case-insensitive by name.
fn compare_nodes(a: &CollectionNode, b: &CollectionNode) -> Ordering {
    b.is_directory()
        .cmp(&a.is_directory())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
