//! posthorn
//!
//! TUI browser for HTTP request collections stored as `*.posting.yaml`
//! files, with a dialog for creating new requests.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! pure, `collection`, `integration` and `view` touch the filesystem and the
//! terminal.

pub mod collection;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

// Main loop integration
pub mod integration;
