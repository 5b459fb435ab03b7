//! Core data types for the storage layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;
use crate::error::{DiaryError, Result};

/// A diary entry.
///
/// Field names and order match the persisted layout of both backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned by the backend on add
    pub id: Uuid,

    /// Calendar day the entry is about (not unique)
    pub date: NaiveDate,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Free-form mood label
    #[serde(default)]
    pub mood: String,

    /// Tags in insertion order (duplicates allowed)
    #[serde(default)]
    pub tags: Vec<String>,

    /// When this entry was added; never changes
    #[serde(with = "timestamp::serde_micros")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on every successful update
    #[serde(with = "timestamp::serde_micros")]
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Build a stored entry from a draft, assigning a fresh id and equal timestamps.
    pub(crate) fn create(draft: &NewEntry) -> Result<Self> {
        let date = draft.require_date()?;
        let now = timestamp::now();
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            title: draft.title.clone(),
            body: draft.body.clone(),
            mood: draft.mood.clone(),
            tags: draft.tags.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite the editable field group and refresh `updated_at`.
    pub(crate) fn apply(&mut self, fields: &NewEntry) -> Result<()> {
        let date = fields.require_date()?;
        self.date = date;
        self.title = fields.title.clone();
        self.body = fields.body.clone();
        self.mood = fields.mood.clone();
        self.tags = fields.tags.clone();
        self.updated_at = timestamp::now();
        Ok(())
    }

    /// The date rendered as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Date format used for `Entry::date` everywhere.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Draft for creating an entry, also used as the field group for updates.
///
/// `date` is required by both `add_entry` and `update_entry`; the other
/// fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    pub title: String,
    pub body: String,
    pub mood: String,
    pub tags: Vec<String>,
}

impl NewEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Return the date, or `InvalidInput` if the draft has none.
    pub fn require_date(&self) -> Result<NaiveDate> {
        self.date
            .ok_or_else(|| DiaryError::InvalidInput("entry date is required".to_string()))
    }
}

impl From<&Entry> for NewEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            date: Some(entry.date),
            title: entry.title.clone(),
            body: entry.body.clone(),
            mood: entry.mood.clone(),
            tags: entry.tags.clone(),
        }
    }
}
