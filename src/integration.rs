//! Glue between the pure state machine and the filesystem.
//!
//! The event loop calls into here when the new-request dialog confirms; the
//! state types themselves never write to disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::collection::{save_new_request, CollectionTree};
use crate::model::{CollectionError, NewRequestData, Notification};
use crate::state::AppState;

/// Persist a confirmed request and refresh the collection view.
///
/// Once the file is written a "Request created" notification is shown, then
/// the tree is reloaded and the new file selected. A failed save becomes an
/// error notification; a failed reload becomes a warning and keeps the old
/// tree. The application keeps running either way.
///
/// # Returns
/// The path of the written file, if saving succeeded.
pub fn create_request(state: &mut AppState, data: &NewRequestData) -> Option<PathBuf> {
    let root = state.root_path().unwrap_or_else(|| PathBuf::from("."));
    let path = match save_new_request(&root, data) {
        Ok(path) => path,
        Err(err) => {
            warn!(error = %err, "Failed to create request");
            state.notify(Notification::error(err.to_string()));
            return None;
        }
    };
    state.notify(Notification::information("Request created"));

    apply_reload(state, CollectionTree::load(&root), &path);
    Some(path)
}

fn apply_reload(
    state: &mut AppState,
    reloaded: Result<CollectionTree, CollectionError>,
    created: &Path,
) {
    match reloaded {
        Ok(tree) => {
            state.set_collection(tree);
            if !state.select_path(created) {
                info!(path = %created.display(), "Created request not found after reload");
            }
        }
        Err(err) => {
            warn!(error = %err, "Request saved but collection reload failed");
            state.notify(Notification::warning(format!(
                "Request saved, but the collection could not be reloaded: {err}"
            )));
        }
    }
}
