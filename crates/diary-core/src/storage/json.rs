//! JSON document storage backend.
//!
//! The whole diary lives in one JSON file shaped `{"entries": [...]}`.
//! Every call loads and parses the full document; every mutation rewrites
//! the full document through an atomic temp-file rename. No handle is held
//! between calls.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, NewEntry};

/// On-disk document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DiaryDocument {
    #[serde(default)]
    entries: Vec<Entry>,
}

/// JSON document storage engine.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<DiaryDocument> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn store(&self, document: &DiaryDocument) -> Result<()> {
        let raw = serde_json::to_string_pretty(document)?;
        crate::fs::write_atomic(&self.path, raw.as_bytes())?;
        Ok(())
    }
}

/// Case-insensitive (ASCII) substring match over title, body, and tags.
///
/// Folding is ASCII-only to agree with SQLite's `LIKE`.
fn matches_keyword(entry: &Entry, needle: &str) -> bool {
    entry.title.to_ascii_lowercase().contains(needle)
        || entry.body.to_ascii_lowercase().contains(needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_ascii_lowercase().contains(needle))
}

impl StorageEngine for JsonStorage {
    fn open(path: &Path) -> Result<Self> {
        let storage = Self {
            path: path.to_path_buf(),
        };
        if !path.exists() {
            storage.store(&DiaryDocument::default())?;
            tracing::info!(path = %path.display(), "initialized json diary");
        } else {
            tracing::info!(path = %path.display(), "opened json diary");
        }
        Ok(storage)
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }

    fn add_entry(&mut self, entry: &NewEntry) -> Result<Uuid> {
        let record = Entry::create(entry)?;
        let id = record.id;

        let mut document = self.load()?;
        document.entries.push(record);
        self.store(&document)?;

        tracing::debug!(%id, "added entry");
        Ok(id)
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>> {
        let document = self.load()?;
        Ok(document.entries.into_iter().find(|entry| entry.id == *id))
    }

    fn get_entries_by_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .load()?
            .entries
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    fn search_entries(&self, keyword: &str) -> Result<Vec<Entry>> {
        let needle = keyword.to_ascii_lowercase();
        let mut entries: Vec<Entry> = self
            .load()?
            .entries
            .into_iter()
            .filter(|entry| matches_keyword(entry, &needle))
            .collect();
        // Stable: entries sharing a date keep document order.
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(keyword, matches = entries.len(), "searched entries");
        Ok(entries)
    }

    fn list_entries(&self) -> Result<Vec<Entry>> {
        let mut entries = self.load()?.entries;
        entries.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        Ok(entries)
    }

    fn update_entry(&mut self, id: &Uuid, fields: &NewEntry) -> Result<bool> {
        fields.require_date()?;
        let mut document = self.load()?;

        let Some(entry) = document.entries.iter_mut().find(|entry| entry.id == *id) else {
            tracing::debug!(%id, found = false, "updated entry");
            return Ok(false);
        };
        entry.apply(fields)?;
        self.store(&document)?;

        tracing::debug!(%id, found = true, "updated entry");
        Ok(true)
    }

    fn delete_entry(&mut self, id: &Uuid) -> Result<bool> {
        let mut document = self.load()?;
        let before = document.entries.len();
        document.entries.retain(|entry| entry.id != *id);
        if document.entries.len() == before {
            tracing::debug!(%id, found = false, "deleted entry");
            return Ok(false);
        }
        self.store(&document)?;

        tracing::debug!(%id, found = true, "deleted entry");
        Ok(true)
    }
}
