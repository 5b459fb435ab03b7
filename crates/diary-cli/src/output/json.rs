//! JSON output formatting for entries.

use diary_core::storage::{timestamp, Entry};
use serde::Serialize;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "date": entry.date_string(),
        "title": entry.title,
        "body": entry.body,
        "mood": entry.mood,
        "tags": entry.tags,
        "created_at": timestamp::format(&entry.created_at),
        "updated_at": timestamp::format(&entry.updated_at),
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
