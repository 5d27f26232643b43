//! Error handling for itemdb-store
//!
//! Store failures are classified as `ItemDbError` and surfaced as `ExError`

use itemdb_core::errors::{ExError, ItemDbError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    storage_error("sqlite", err)
}

/// Create a database error attributed to a store operation
pub fn storage_error(op: &str, err: rusqlite::Error) -> ExError {
    ItemDbError::Storage {
        op: op.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Create a database error for an operation targeting one item
pub fn item_storage_error(op: &str, id: i64, err: rusqlite::Error) -> ExError {
    storage_error(op, err).with_item_id(id)
}

/// Create a schema bootstrap error
pub fn schema_error(reason: &str) -> ExError {
    ItemDbError::Storage {
        op: "ensure_schema".to_string(),
        message: format!("Schema bootstrap failed: {}", reason),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ItemDbError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
    .into()
}
