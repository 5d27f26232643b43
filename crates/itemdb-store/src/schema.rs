//! Embedded schema bootstrap
//!
//! The schema is embedded at compile time using include_str! and applied on
//! every open. There is no versioning: the statement only creates what is
//! missing and never alters an existing table.

#![allow(clippy::result_large_err)]

use crate::errors::{schema_error, Result};
use rusqlite::Connection;

/// Name of the single table managed by the store
pub const ITEMS_TABLE: &str = "items";

/// Schema DDL for the items table
pub const ITEMS_SQL: &str = include_str!("../schema/items.sql");

/// Create the items table if it does not already exist
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(ITEMS_SQL)
        .map_err(|e| schema_error(&e.to_string()))?;

    tracing::debug!(table = ITEMS_TABLE, "schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(ensure_schema(&conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert!(ensure_schema(&conn).is_ok());
    }
}
