//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs go to a file instead. Follow them with
//! `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no usable file name component
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Directory and file name a log path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Directory created before the appender opens the file.
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
}

/// Split `log_path` into the directory to create and the file to append to.
///
/// A bare file name resolves to the current directory.
pub fn resolve_log_target(log_path: &Path) -> Result<LogTarget, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(LogTarget {
        directory,
        file_name: file_name.to_string(),
    })
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to `info`. Creates the log directory if it
/// doesn't exist.
///
/// # Errors
/// * [`LoggingError::InvalidPath`] if `log_path` has no file name
/// * [`LoggingError::DirectoryCreation`] if the directory cannot be created
/// * [`LoggingError::SubscriberAlreadySet`] if called twice in one process
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let target = resolve_log_target(log_path)?;

    std::fs::create_dir_all(&target.directory).map_err(|source| {
        LoggingError::DirectoryCreation {
            path: target.directory.clone(),
            source,
        }
    })?;

    let file_appender = tracing_appender::rolling::never(&target.directory, &target.file_name);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn resolve_splits_directory_and_file() {
        let target = resolve_log_target(Path::new("/var/log/posthorn/app.log")).unwrap();
        assert_eq!(target.directory, PathBuf::from("/var/log/posthorn"));
        assert_eq!(target.file_name, "app.log");
    }

    #[test]
    fn resolve_bare_file_uses_current_directory() {
        let target = resolve_log_target(Path::new("posthorn.log")).unwrap();
        assert_eq!(target.directory, PathBuf::from("."));
        assert_eq!(target.file_name, "posthorn.log");
    }

    #[test]
    fn resolve_rejects_path_without_file_name() {
        let err = resolve_log_target(Path::new("/")).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidPath(_)));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let temp = tempfile::tempdir().unwrap();
        let log_dir = temp.path().join("nested").join("logs");
        let log_file = log_dir.join("test.log");

        // May fail with SubscriberAlreadySet; the directory is created first.
        let _ = init(&log_file);

        assert!(log_dir.exists(), "Log directory should be created: {:?}", log_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let temp = tempfile::tempdir().unwrap();
        let log_file = temp.path().join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    }
}
