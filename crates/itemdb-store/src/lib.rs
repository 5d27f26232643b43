//! itemdb Store - SQLite-backed record store for items
//!
//! Provides:
//! - Connection management (`db`)
//! - Idempotent schema bootstrap (`schema`)
//! - The `ItemStore` owning the connection and the five CRUD operations

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::ItemStore;
