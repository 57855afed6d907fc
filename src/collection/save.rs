//! Persisting new requests into a collection.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::model::{CollectionError, NewRequestData, RequestFile};

/// Write a new request file for `data` under `root`.
///
/// Creates `root/<directory>` if needed and writes a blank GET request named
/// after the title. Never overwrites an existing file.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// - [`CollectionError::AlreadyExists`] if the target file is already present
/// - [`CollectionError::Write`] if the directory or file cannot be written
/// - [`CollectionError::Serialize`] if the document cannot be encoded
pub fn save_new_request(root: &Path, data: &NewRequestData) -> Result<PathBuf, CollectionError> {
    let directory = root.join(&data.directory);
    std::fs::create_dir_all(&directory).map_err(|source| CollectionError::Write {
        path: directory.clone(),
        source,
    })?;

    let path = directory.join(&data.file_name);
    let yaml = serde_yaml::to_string(&RequestFile::from_new_request(data))
        .map_err(CollectionError::Serialize)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => CollectionError::AlreadyExists(path.clone()),
            _ => CollectionError::Write {
                path: path.clone(),
                source,
            },
        })?;

    file.write_all(yaml.as_bytes())
        .map_err(|source| CollectionError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), title = %data.title, "Request created");
    Ok(path)
}
