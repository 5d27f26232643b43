//! Repository layer for persisting items to SQLite

pub mod item_store;

pub use item_store::ItemStore;
