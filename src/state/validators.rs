//! Field validators for the new-request dialog.

use crate::collection::is_valid_filename;

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value is acceptable.
    Valid,
    /// The value is rejected.
    Invalid {
        /// Human-readable reason.
        reason: &'static str,
    },
}

impl ValidationResult {
    /// True for [`Self::Valid`].
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Rejection reason, if any.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

/// A predicate over a single-line field value.
pub trait Validator: std::fmt::Debug {
    /// Check `value`.
    fn validate(&self, value: &str) -> ValidationResult;
}

/// Accepts legal file name stems.
///
/// Note that blank input fails here; the file-name field opts into
/// treating blank as valid separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNameValidator;

impl Validator for FileNameValidator {
    fn validate(&self, value: &str) -> ValidationResult {
        if is_valid_filename(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid {
                reason: "File name cannot be empty",
            }
        }
    }
}

/// Accepts directories that stay under the collection root.
///
/// This is a plain substring check: empty, `..` anywhere, a leading `/`,
/// or a `:` anywhere is rejected. Paths are not normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryValidator;

impl Validator for DirectoryValidator {
    fn validate(&self, value: &str) -> ValidationResult {
        if is_valid_directory(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid {
                reason: "Invalid directory",
            }
        }
    }
}

fn is_valid_directory(value: &str) -> bool {
    !(value.is_empty() || value.contains("..") || value.starts_with('/') || value.contains(':'))
}
