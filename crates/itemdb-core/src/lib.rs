//! itemdb Core - shared kernel for the item store and its CLI
//!
//! This crate provides:
//! - The `Item` record model
//! - The structured error facility (`ExError`, `ExErrorKind`, `ItemDbError`)
//! - The structured logging facility and its `log_op_*` macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ItemDbError};
pub use model::{Item, ItemId};
