//! Application-level utilities for the Diary CLI.
//!
//! This module provides:
//! - Config file and storage target resolution
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
