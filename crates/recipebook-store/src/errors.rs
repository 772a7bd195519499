//! Error handling for recipebook-store
//!
//! Wraps the core `ExError` facility with store-specific helpers. Every
//! failure of the storage engine surfaces as `StorageUnavailable`, except
//! rows that cannot be decoded, which surface as `CorruptRecord`.

use recipebook_core::errors::{ExError, ExErrorKind, JournalError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> ExError {
    let kind = match err {
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => ExErrorKind::CorruptRecord,
        _ => ExErrorKind::StorageUnavailable,
    };

    ExError::new(kind)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Convert a rule violation into a store error for the given operation
pub fn rejected(op: &str, err: JournalError) -> ExError {
    ExError::from(err).with_op(op.to_string())
}
