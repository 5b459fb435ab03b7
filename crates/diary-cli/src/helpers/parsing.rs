//! Parsing helpers for dates, ids, tags, and keywords.

use chrono::NaiveDate;
use diary_core::storage::DATE_FORMAT;
use uuid::Uuid;

use crate::errors::CliError;

/// Message shown for any malformed date.
pub const DATE_FORMAT_MESSAGE: &str = "Date should be in YYYY-MM-DD format";

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    let trimmed = value.trim();
    // chrono accepts unpadded fields, so insist on the exact width too.
    if trimmed.len() != 10 {
        return Err(CliError::invalid_input(DATE_FORMAT_MESSAGE));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CliError::invalid_input(DATE_FORMAT_MESSAGE))
}

/// Parse a full UUID entry id.
pub fn parse_entry_id(value: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| CliError::invalid_input(format!("Invalid entry ID: {}", value.trim())))
}

/// Split a comma-separated tag string, trimming and dropping empties.
pub fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Combine repeated `--tag` values with a `--tags a,b` list, in that order.
pub fn merge_tags(repeated: &[String], csv: Option<&str>) -> Vec<String> {
    let mut tags: Vec<String> = repeated
        .iter()
        .flat_map(|t| parse_tags(t))
        .collect();
    if let Some(csv) = csv {
        tags.extend(parse_tags(csv));
    }
    tags
}

/// Reject blank search keywords before they reach storage.
pub fn require_keyword(value: &str) -> Result<&str, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CliError::invalid_input("Empty keyword"))
    } else {
        Ok(trimmed)
    }
}
