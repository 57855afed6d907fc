//! Request collection on disk (impure).
//!
//! Filename rules, tree loading, and writing new request files.

pub mod files;
pub mod save;
pub mod tree;

pub use files::{generate_request_filename, is_valid_filename, request_file_exists, FILE_SUFFIX};
pub use save::save_new_request;
pub use tree::{CollectionNode, CollectionTree, NodeKind, ParentNode, TreeRow};
