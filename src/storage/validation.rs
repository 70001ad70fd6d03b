//! Filename validation
//!
//! A fetched file's name travels in a space-separated request line and is
//! then used as a path inside the download directory.

use crate::error::ArgumentError;

/// Longest filename accepted for a fetch.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Validate that a filename is a single plain path component that fits in
/// one request field.
pub fn validate_filename(filename: &str) -> Result<(), ArgumentError> {
    if filename.is_empty() {
        return Err(ArgumentError::MissingFilename);
    }

    let invalid = filename.len() > MAX_FILENAME_LENGTH
        || filename.chars().any(|c| c.is_whitespace() || c == '\0')
        || filename.contains('/')
        || filename.contains('\\')
        || filename == "."
        || filename == "..";

    if invalid {
        return Err(ArgumentError::InvalidFilename(filename.to_string()));
    }

    Ok(())
}
