//! # Diary Core
//!
//! Core library for Diary - a CLI-first personal journal with pluggable storage.
//!
//! This crate provides the data model, the storage contract and its backends,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait, SQLite and JSON document backends
//! - **mood**: Mood frequency statistics
//! - **export**: Plain text / Markdown export of entries to files

pub mod error;
pub mod export;
pub mod fs;
pub mod mood;
pub mod storage;

pub use error::{DiaryError, Result};
pub use storage::StorageEngine;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
