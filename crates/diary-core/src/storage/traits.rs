//! Storage engine trait definition.
//!
//! The `StorageEngine` trait defines the interface that all storage backends
//! must implement. The CLI only talks to this trait, so the SQLite and JSON
//! document backends are interchangeable.

use std::path::Path;

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{Entry, NewEntry};
use crate::error::Result;

/// Storage engine interface for diary entries.
///
/// All implementations must ensure:
/// - Ids are assigned by the backend and never reused
/// - Every mutation is durable before the call returns
/// - A mutation either fully succeeds or leaves the store untouched
/// - Read operations never mutate
pub trait StorageEngine: Send + Sync {
    /// Open (or initialize) a store at the specified path.
    ///
    /// Initialization is idempotent: opening an existing, populated store
    /// leaves its contents untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the medium cannot be created or read.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Short backend name for diagnostics ("sqlite", "json").
    fn backend_name(&self) -> &'static str;

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the id of the created entry. `created_at` and `updated_at`
    /// are set to the same instant.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if the draft has no date.
    fn add_entry(&mut self, entry: &NewEntry) -> Result<Uuid>;

    /// Get an entry by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>>;

    /// All entries on `date`, newest `created_at` first.
    fn get_entries_by_date(&self, date: NaiveDate) -> Result<Vec<Entry>>;

    /// Case-insensitive substring search over title, body, and tags.
    ///
    /// Results are ordered by date, newest first. The order of entries
    /// sharing a date is backend-dependent.
    fn search_entries(&self, keyword: &str) -> Result<Vec<Entry>>;

    /// Every entry, ordered by date then `created_at`, newest first.
    fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Replace date, title, body, mood, and tags, and refresh `updated_at`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` without touching the store if `id` does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if `fields` has no date.
    fn update_entry(&mut self, id: &Uuid, fields: &NewEntry) -> Result<bool>;

    /// Remove an entry. Returns `Ok(false)` if `id` does not exist.
    fn delete_entry(&mut self, id: &Uuid) -> Result<bool>;

    /// Full dump for export; same order as `list_entries`.
    fn export_all(&self) -> Result<Vec<Entry>> {
        self.list_entries()
    }
}
