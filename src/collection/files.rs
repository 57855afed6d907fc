//! Filename helpers for request files in a collection.

use std::path::Path;

/// Suffix of every request file on disk.
pub const FILE_SUFFIX: &str = ".posting.yaml";

/// Longest slug produced by [`generate_request_filename`].
const MAX_SLUG_LENGTH: usize = 32;

/// Slug used when a title has no usable characters.
const FALLBACK_SLUG: &str = "request";

/// Characters that are illegal in file names on at least one supported platform.
const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Check whether `name` is usable as a request file name stem.
///
/// Rejects blank names, names containing path separators or other
/// characters that are illegal on common filesystems, control characters,
/// and names longer than 255 bytes.
pub fn is_valid_filename(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    if name.len() > 255 {
        return false;
    }
    !name
        .chars()
        .any(|c| FORBIDDEN_CHARS.contains(&c) || c.is_control())
}

/// Check whether a request file named `file_name` already exists in `directory`.
///
/// `file_name` is the full on-disk name, suffix included.
pub fn request_file_exists(file_name: &str, directory: &Path) -> bool {
    directory.join(file_name).is_file()
}

/// Derive a filename-safe slug from a request title.
///
/// Lowercases ASCII letters, keeps alphanumerics, `-` and `_`, and collapses
/// every other run of characters into a single `-`. Dashes are trimmed from
/// both ends before and after capping the length at 32. A title with no
/// usable characters yields `"request"`.
pub fn generate_request_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    // ASCII only from here, so byte slicing is char-safe
    let slug = slug.trim_matches('-');
    let slug = slug[..slug.len().min(MAX_SLUG_LENGTH)].trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
