use std::path::Path;

use crate::errors::{JournalError, Result};

/// Image extensions accepted from the uploader (compared case-insensitively)
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// True when the text is empty or whitespace-only
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Validate a display name before an Identity is created
///
/// # Errors
/// `JournalError::EmptyName` when the trimmed name is empty.
pub fn validate_identity_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(JournalError::EmptyName);
    }
    Ok(())
}

/// Validate the required text fields of a recipe
///
/// The title is checked before the note, so a recipe with both fields blank
/// reports the missing title.
///
/// # Errors
/// `JournalError::EmptyTitle` or `JournalError::EmptyNote`.
pub fn validate_recipe_fields(title: &str, note: &str) -> Result<()> {
    if is_blank(title) {
        return Err(JournalError::EmptyTitle);
    }
    if is_blank(note) {
        return Err(JournalError::EmptyNote);
    }
    Ok(())
}

/// Check that an uploaded file looks like a supported picture by extension
///
/// Only the file name is inspected; the bytes are stored as-is.
///
/// # Errors
/// `JournalError::UnsupportedImageType` for any other (or missing) extension.
pub fn validate_image_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if ACCEPTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(JournalError::UnsupportedImageType { extension })
    }
}
