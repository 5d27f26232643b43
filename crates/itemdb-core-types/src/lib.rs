//! Core types shared across itemdb facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error facility and the logging facility.

pub mod schema;
