//! Error types for posthorn.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`CollectionError`] - Reading, parsing or writing request files
//!   - [`crate::config::ConfigError`] - Config file loading and keymap parsing
//!   - [`crate::logging::LoggingError`] - Tracing subscriber setup
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! Dialog input problems are not errors in this sense. They are reported as
//! [`CreateRejection`] values, shown to the user as notifications, and the
//! dialog stays open.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load or write the request collection.
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Failed to load configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Failed to set up logging.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function, so this is fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised while reading or writing the on-disk collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The collection root (or a directory below it) could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A request file is not a valid request document.
    #[error("Invalid request file {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// YAML error details.
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing a request file (or creating its directory) failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Refused to overwrite an existing request file.
    #[error("A request already exists at {0}")]
    AlreadyExists(PathBuf),

    /// A request document could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Reasons the new-request dialog refuses to close on create.
///
/// The `Display` text is exactly what the user sees in the error notification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CreateRejection {
    /// The directory field failed validation.
    #[error("Directory must be relative to the collection root.")]
    InvalidDirectory,

    /// The file name field is non-blank and failed validation.
    #[error("Invalid file name.")]
    InvalidFileName,

    /// A request file with the computed name already exists under the parent.
    #[error("A request with this name already exists.")]
    DuplicateName,
}
