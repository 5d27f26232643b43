//! SQLite record store for items
//!
//! `ItemStore` owns the single connection for the lifetime of the process
//! and exposes the create/read/update/delete operations over the `items`
//! table. Every operation is one statement committed immediately.
//!
//! ## Logging Ownership
//!
//! Each public operation emits `log_op_start!` at entry and exactly one of
//! `log_op_end!` / `log_op_error!` on exit.
//!
//! ## Not found
//!
//! A missing id is a normal outcome: `read_one` returns `None`, `update` and
//! `delete` return `false`. Only storage failures are errors.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{item_storage_error, storage_error, Result};
use crate::schema::ensure_schema;
use chrono::{DateTime, NaiveDateTime, Utc};
use itemdb_core::model::{Item, ItemId};
use itemdb_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::time::Instant;

const SELECT_COLUMNS: &str = "SELECT id, name, description, created_at FROM items";

/// Text layout of the store clock (`strftime('%Y-%m-%d %H:%M:%f')`)
const STORE_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Record store owning the SQLite connection
///
/// Acquire with [`ItemStore::open`], release with [`ItemStore::close`].
/// Dropping the store also releases the connection.
pub struct ItemStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl ItemStore {
    /// Open (or create) the store file at `path`
    ///
    /// Creates missing parent directories and the `items` table.
    ///
    /// ## Errors
    ///
    /// - `Io`: parent directory could not be created
    /// - `Persistence`: the file could not be opened or the schema applied
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = db::open(path)?;
        let store = Self::from_connection(conn, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "item store opened");
        Ok(store)
    }

    /// Open a store backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        db::configure(&conn)?;
        ensure_schema(&conn)?;
        Ok(Self { conn, path })
    }

    /// Backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Release the connection, reporting any failure to close it
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, e)| storage_error("close", e))?;
        tracing::debug!("item store closed");
        Ok(())
    }

    /// Insert a new item and return its store-assigned id
    ///
    /// `name` is stored as given; `created_at` comes from the store clock.
    pub fn create(&self, name: &str, description: Option<&str>) -> Result<ItemId> {
        log_op_start!("item_create");
        let start = Instant::now();

        let id = self.create_impl(name, description).map_err(|e| {
            log_op_error!(
                "item_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "item_create",
            duration_ms = start.elapsed().as_millis() as u64,
            item_id = id
        );

        Ok(id)
    }

    fn create_impl(&self, name: &str, description: Option<&str>) -> Result<ItemId> {
        self.conn
            .execute(
                "INSERT INTO items (name, description) VALUES (?1, ?2)",
                params![name, description],
            )
            .map_err(|e| storage_error("item_create", e))?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Look up one item by id
    pub fn read_one(&self, id: ItemId) -> Result<Option<Item>> {
        log_op_start!("item_read_one", item_id = id);
        let start = Instant::now();

        let item = self.read_one_impl(id).map_err(|e| {
            log_op_error!(
                "item_read_one",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                item_id = id
            );
            e
        })?;

        log_op_end!(
            "item_read_one",
            duration_ms = start.elapsed().as_millis() as u64,
            item_id = id,
            found = item.is_some()
        );

        Ok(item)
    }

    fn read_one_impl(&self, id: ItemId) -> Result<Option<Item>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| item_storage_error("item_read_one", id, e))?;

        stmt.query_row([id], item_from_row)
            .optional()
            .map_err(|e| item_storage_error("item_read_one", id, e))
    }

    /// All items, ordered by id ascending
    ///
    /// Each call re-reads the table.
    pub fn read_all(&self) -> Result<Vec<Item>> {
        log_op_start!("item_read_all");
        let start = Instant::now();

        let items = self.read_all_impl().map_err(|e| {
            log_op_error!(
                "item_read_all",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "item_read_all",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = items.len() as u64
        );

        Ok(items)
    }

    fn read_all_impl(&self) -> Result<Vec<Item>> {
        let sql = format!("{} ORDER BY id ASC", SELECT_COLUMNS);
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| storage_error("item_read_all", e))?;

        let items = stmt
            .query_map([], item_from_row)
            .map_err(|e| storage_error("item_read_all", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| storage_error("item_read_all", e))?;

        Ok(items)
    }

    /// Overwrite name and description of an item
    ///
    /// Returns `false` when no item has this id.
    pub fn update(&self, id: ItemId, name: &str, description: Option<&str>) -> Result<bool> {
        log_op_start!("item_update", item_id = id);
        let start = Instant::now();

        let updated = self.update_impl(id, name, description).map_err(|e| {
            log_op_error!(
                "item_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                item_id = id
            );
            e
        })?;

        log_op_end!(
            "item_update",
            duration_ms = start.elapsed().as_millis() as u64,
            item_id = id,
            found = updated
        );

        Ok(updated)
    }

    fn update_impl(&self, id: ItemId, name: &str, description: Option<&str>) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE items SET name = ?1, description = ?2 WHERE id = ?3",
                params![name, description, id],
            )
            .map_err(|e| item_storage_error("item_update", id, e))?;

        Ok(changed > 0)
    }

    /// Permanently remove an item
    ///
    /// Returns `false` when no item has this id.
    pub fn delete(&self, id: ItemId) -> Result<bool> {
        log_op_start!("item_delete", item_id = id);
        let start = Instant::now();

        let deleted = self.delete_impl(id).map_err(|e| {
            log_op_error!(
                "item_delete",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                item_id = id
            );
            e
        })?;

        log_op_end!(
            "item_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            item_id = id,
            found = deleted
        );

        Ok(deleted)
    }

    fn delete_impl(&self, id: ItemId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", [id])
            .map_err(|e| item_storage_error("item_delete", id, e))?;

        Ok(removed > 0)
    }
}

/// Map a row selected with `SELECT_COLUMNS` into an Item
fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    let raw_created_at: String = row.get("created_at")?;
    let created_at = parse_store_clock(&raw_created_at).map_err(|e| {
        let idx = row.as_ref().column_index("created_at").unwrap_or(3);
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })?;

    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        created_at,
    })
}

/// Parse the store clock's UTC text (fractional seconds optional)
fn parse_store_clock(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, STORE_CLOCK_FORMAT).map(|naive| naive.and_utc())
}
