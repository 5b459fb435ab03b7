//! Storage abstraction for Diary.
//!
//! This module defines the `StorageEngine` trait, the entry data model, and
//! the two backends that implement it.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `sqlite`: one row per entry in a SQLite database file
//! - `json`: a single JSON document rewritten on every mutation
//!
//! The backend is chosen at startup from configuration via
//! [`open_backend`]; callers only see `Box<dyn StorageEngine>`.

pub mod backend;
pub mod json;
pub mod sqlite;
pub mod timestamp;
pub mod traits;
pub mod types;

// Re-export public types
pub use backend::{open_backend, BackendKind};
pub use json::JsonStorage;
pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{Entry, NewEntry, DATE_FORMAT};
