//! SQLite storage backend.
//!
//! One row per entry in a single `entries` table inside a SQLite database
//! file. The connection is opened on construction and held until the
//! storage value is dropped.

mod row;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Params};
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::timestamp;
use crate::storage::traits::StorageEngine;
use crate::storage::types::{Entry, NewEntry, DATE_FORMAT};

use row::{encode_tags, EntryRow, ENTRY_COLUMNS};

pub use row::TAG_SEPARATOR;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id TEXT PRIMARY KEY,
        date TEXT,
        title TEXT,
        body TEXT,
        mood TEXT,
        tags TEXT,
        created_at TEXT,
        updated_at TEXT
    );

    CREATE INDEX IF NOT EXISTS entries_date ON entries (date);
"#;

/// SQLite storage engine.
pub struct SqliteStorage {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DiaryError::Storage("SQLite connection poisoned".to_string()))
    }

    fn query_entries<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Entry>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, EntryRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }
}

/// Build a `LIKE` pattern that matches `keyword` literally anywhere in a column.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl StorageEngine for SqliteStorage {
    fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %path.display(), "opened sqlite diary");

        Ok(Self {
            path: path.to_path_buf(),
            conn: Mutex::new(conn),
        })
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn add_entry(&mut self, entry: &NewEntry) -> Result<Uuid> {
        let record = Entry::create(entry)?;
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO entries (id, date, title, body, mood, tags, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            (
                record.id.to_string(),
                record.date_string(),
                &record.title,
                &record.body,
                &record.mood,
                encode_tags(&record.tags),
                timestamp::format(&record.created_at),
                timestamp::format(&record.updated_at),
            ),
        )?;

        tracing::debug!(id = %record.id, date = %record.date, "added entry");
        Ok(record.id)
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS),
                [id.to_string()],
                EntryRow::from_row,
            )
            .optional()?;

        row.map(Entry::try_from).transpose()
    }

    fn get_entries_by_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        self.query_entries(
            &format!(
                "SELECT {} FROM entries WHERE date = ?1 ORDER BY created_at DESC",
                ENTRY_COLUMNS
            ),
            [date.format(DATE_FORMAT).to_string()],
        )
    }

    fn search_entries(&self, keyword: &str) -> Result<Vec<Entry>> {
        let entries = self.query_entries(
            &format!(
                r#"
                SELECT {}
                FROM entries
                WHERE title LIKE ?1 ESCAPE '\'
                   OR body LIKE ?1 ESCAPE '\'
                   OR tags LIKE ?1 ESCAPE '\'
                ORDER BY date DESC
                "#,
                ENTRY_COLUMNS
            ),
            [like_pattern(keyword)],
        )?;
        tracing::debug!(keyword, matches = entries.len(), "searched entries");
        Ok(entries)
    }

    fn list_entries(&self) -> Result<Vec<Entry>> {
        self.query_entries(
            &format!(
                "SELECT {} FROM entries ORDER BY date DESC, created_at DESC",
                ENTRY_COLUMNS
            ),
            [],
        )
    }

    fn update_entry(&mut self, id: &Uuid, fields: &NewEntry) -> Result<bool> {
        let date = fields.require_date()?;
        let updated_at = timestamp::now();
        let conn = self.lock_conn()?;

        let changed = conn.execute(
            r#"
            UPDATE entries
            SET date = ?1, title = ?2, body = ?3, mood = ?4, tags = ?5, updated_at = ?6
            WHERE id = ?7
            "#,
            (
                date.format(DATE_FORMAT).to_string(),
                &fields.title,
                &fields.body,
                &fields.mood,
                encode_tags(&fields.tags),
                timestamp::format(&updated_at),
                id.to_string(),
            ),
        )?;

        tracing::debug!(%id, found = changed > 0, "updated entry");
        Ok(changed > 0)
    }

    fn delete_entry(&mut self, id: &Uuid) -> Result<bool> {
        let conn = self.lock_conn()?;
        let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id.to_string()])?;

        tracing::debug!(%id, found = changed > 0, "deleted entry");
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("work"), "%work%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_open_is_idempotent_on_populated_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.db");

        let id = {
            let mut storage = SqliteStorage::open(&path).unwrap();
            storage
                .add_entry(&NewEntry::new(day("2024-01-01")).with_title("kept"))
                .unwrap()
        };

        let storage = SqliteStorage::open(&path).unwrap();
        let entry = storage.get_entry(&id).unwrap().unwrap();
        assert_eq!(entry.title, "kept");
        assert_eq!(storage.list_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_tags_stored_comma_joined() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.db");
        let mut storage = SqliteStorage::open(&path).unwrap();
        let id = storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_tags(vec!["x".to_string(), "y".to_string()]),
            )
            .unwrap();

        let conn = storage.lock_conn().unwrap();
        let raw: String = conn
            .query_row("SELECT tags FROM entries WHERE id = ?1", [id.to_string()], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(raw, "x,y");
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let dir = tempdir().unwrap();
        let mut storage = SqliteStorage::open(&dir.path().join("diary.db")).unwrap();
        storage
            .add_entry(&NewEntry::new(day("2024-01-01")).with_title("axb"))
            .unwrap();
        storage
            .add_entry(&NewEntry::new(day("2024-01-02")).with_title("a_b"))
            .unwrap();

        let results = storage.search_entries("a_b").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "a_b");
    }

    #[test]
    fn test_search_keyword_with_separator_spans_tags() {
        let dir = tempdir().unwrap();
        let mut storage = SqliteStorage::open(&dir.path().join("diary.db")).unwrap();
        let id = storage
            .add_entry(
                &NewEntry::new(day("2024-01-01"))
                    .with_tags(vec!["x".to_string(), "y".to_string()]),
            )
            .unwrap();

        let results = storage.search_entries("x,y").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, id);
        assert!(storage.search_entries("y,x").unwrap().is_empty());
    }

    #[test]
    fn test_reads_rows_written_with_naive_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.db");
        let storage = SqliteStorage::open(&path).unwrap();
        {
            let conn = storage.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO entries VALUES (?1, '2023-05-01', 'old', 'body', '', '', ?2, ?2)",
                [
                    "0b8f3c1e-5d6a-4b7c-8d9e-0f1a2b3c4d5e",
                    "2023-05-01T10:00:00.123456",
                ],
            )
            .unwrap();
        }

        let entries = storage.list_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "old");
        assert!(entries[0].tags.is_empty());
    }

    #[test]
    fn test_corrupt_row_is_storage_failure() {
        let dir = tempdir().unwrap();
        let storage = SqliteStorage::open(&dir.path().join("diary.db")).unwrap();
        {
            let conn = storage.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO entries (id, date) VALUES ('broken', '2024-01-01')",
                [],
            )
            .unwrap();
        }

        let err = storage.list_entries().unwrap_err();
        assert!(err.is_storage_failure());
    }
}
