//! Entry row type for database queries.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::timestamp;
use crate::storage::types::{Entry, DATE_FORMAT};

/// Separator used to pack tags into the `tags` column.
///
/// Tags containing this character cannot round-trip; a tag `"a,b"` reads
/// back as two tags. Search runs over the joined column, so a keyword
/// containing it can match across two adjacent tags.
pub const TAG_SEPARATOR: char = ',';

/// Columns selected for every entry query, in `EntryRow` order.
pub const ENTRY_COLUMNS: &str = "id, date, title, body, mood, tags, created_at, updated_at";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub date: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl EntryRow {
    /// Read a row selected with `ENTRY_COLUMNS`.
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            title: row.get(2)?,
            body: row.get(3)?,
            mood: row.get(4)?,
            tags: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

pub fn encode_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR.to_string().as_str())
}

pub fn decode_tags(value: Option<&str>) -> Vec<String> {
    match value {
        Some(joined) if !joined.is_empty() => {
            joined.split(TAG_SEPARATOR).map(String::from).collect()
        }
        _ => Vec::new(),
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = DiaryError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DiaryError::Storage(format!("Invalid entry id '{}': {}", row.id, e)))?;
        let date_str = row
            .date
            .ok_or_else(|| DiaryError::Storage(format!("Entry {} has no date", id)))?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| DiaryError::Storage(format!("Invalid date '{}': {}", date_str, e)))?;
        let created_at = row
            .created_at
            .as_deref()
            .map(timestamp::parse)
            .transpose()?
            .ok_or_else(|| DiaryError::Storage(format!("Entry {} has no created_at", id)))?;
        let updated_at = row
            .updated_at
            .as_deref()
            .map(timestamp::parse)
            .transpose()?
            .unwrap_or(created_at);

        Ok(Entry {
            id,
            date,
            title: row.title.unwrap_or_default(),
            body: row.body.unwrap_or_default(),
            mood: row.mood.unwrap_or_default(),
            tags: decode_tags(row.tags.as_deref()),
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> EntryRow {
        EntryRow {
            id: "7a2e3c0b-1234-4678-9abc-def012345678".to_string(),
            date: Some("2024-01-01".to_string()),
            title: Some("First".to_string()),
            body: None,
            mood: Some("happy".to_string()),
            tags: Some("x,y".to_string()),
            created_at: Some("2024-01-01T09:00:00.000000Z".to_string()),
            updated_at: Some("2024-01-01T09:00:00.000000Z".to_string()),
        }
    }

    #[test]
    fn test_tags_round_trip_in_order() {
        let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(decode_tags(Some(&encode_tags(&tags))), tags);
    }

    #[test]
    fn test_empty_tags_column_decodes_to_no_tags() {
        assert!(decode_tags(Some("")).is_empty());
        assert!(decode_tags(None).is_empty());
    }

    #[test]
    fn test_tag_with_separator_splits() {
        let tags = vec!["a,b".to_string()];
        assert_eq!(decode_tags(Some(&encode_tags(&tags))), vec!["a", "b"]);
    }

    #[test]
    fn test_joined_column_has_no_tag_boundaries() {
        let joined = encode_tags(&["x".to_string(), "y".to_string()]);
        assert_eq!(joined, "x,y");
        assert_eq!(joined, encode_tags(&["x,y".to_string()]));
    }

    #[test]
    fn test_row_converts_to_entry() {
        let entry: Entry = row().try_into().unwrap();
        assert_eq!(entry.title, "First");
        assert_eq!(entry.body, "");
        assert_eq!(entry.tags, vec!["x", "y"]);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_row_with_bad_date_is_storage_error() {
        let mut bad = row();
        bad.date = Some("01/02/2024".to_string());
        let err = Entry::try_from(bad).unwrap_err();
        assert!(matches!(err, DiaryError::Storage(_)));
    }

    #[test]
    fn test_row_with_bad_id_is_storage_error() {
        let mut bad = row();
        bad.id = "not-a-uuid".to_string();
        assert!(Entry::try_from(bad).is_err());
    }
}
