//! Text shaping for entry lists and the single-entry view.
//!
//! Widths are counted in chars, never bytes, so titles with accents or
//! emoji are cut on a character boundary.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use diary_core::storage::timestamp;

/// Width of the title column in entry lists.
pub const TITLE_COLUMN_WIDTH: usize = 30;

const ELLIPSIS: &str = "...";

/// Cut `s` to `max_len` chars, ending in `...` when something was dropped.
///
/// Widths too small to fit the ellipsis get a bare cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    let Some((cut, _)) = s.char_indices().nth(max_len) else {
        return s.to_string();
    };
    if max_len <= ELLIPSIS.len() {
        return s[..cut].to_string();
    }
    let keep = s
        .char_indices()
        .nth(max_len - ELLIPSIS.len())
        .map_or(s.len(), |(idx, _)| idx);
    format!("{}{}", &s[..keep], ELLIPSIS)
}

/// First `max_chars` chars of `s`, no ellipsis. Plain rows use this.
pub fn clip(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Greedy word wrap of an entry body.
///
/// Each body line wraps on its own; blank lines stay as paragraph breaks.
/// A word longer than `width` gets a line to itself.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for body_line in text.split('\n') {
        let mut words = body_line.split_whitespace();
        let Some(first) = words.next() else {
            out.push(String::new());
            continue;
        };

        let mut line = first.to_string();
        let mut line_chars = first.chars().count();
        for word in words {
            let word_chars = word.chars().count();
            if line_chars + 1 + word_chars > width {
                out.push(std::mem::take(&mut line));
                line.push_str(word);
                line_chars = word_chars;
            } else {
                line.push(' ');
                line.push_str(word);
                line_chars += 1 + word_chars;
            }
        }
        out.push(line);
    }
    out
}

/// Leading 8 hex digits of an entry id, as shown in pretty lists.
pub fn short_id(id: &Uuid) -> String {
    let mut text = id.to_string();
    text.truncate(8);
    text
}

/// Minute precision for people; the stored timestamp text otherwise.
pub fn format_datetime(at: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        at.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        timestamp::format(at)
    }
}

/// Flatten line breaks and tabs so a field fits one table cell.
pub fn single_line(s: &str) -> String {
    s.replace(['\r', '\n', '\t'], " ")
}

/// Tags as shown in pretty output; `-` marks an untagged entry.
pub fn tags_display(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}
