//! Export entries to plain text or Markdown files, one file per entry.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{DiaryError, Result};
use crate::storage::Entry;

/// Title shown in the export header for untitled entries.
const UNTITLED: &str = "(No Title)";

/// File format for exported entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Txt,
    #[default]
    Md,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DiaryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "md" => Ok(Self::Md),
            other => Err(DiaryError::InvalidInput(format!(
                "Unsupported export format: {} (use txt or md)",
                other
            ))),
        }
    }
}

/// Render an entry as a header block (title, mood, tags) followed by the body.
pub fn render_entry(entry: &Entry) -> String {
    let title = if entry.title.is_empty() {
        UNTITLED
    } else {
        entry.title.as_str()
    };
    format!(
        "{} - {}\nMood: {}\nTags: {}\n\n{}",
        title,
        entry.date_string(),
        entry.mood,
        entry.tags.join(", "),
        entry.body
    )
}

/// Keep only characters that are safe in file names (alphanumerics, space, `-`, `_`).
pub fn filename_safe(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Default file stem for an entry: `<date>-<safe title>`, using the id when
/// the entry has no title.
pub fn default_file_stem(entry: &Entry) -> String {
    let id = entry.id.to_string();
    let source = if entry.title.is_empty() {
        id.as_str()
    } else {
        entry.title.as_str()
    };
    let safe_title = filename_safe(source);
    if safe_title.is_empty() {
        id
    } else {
        format!("{}-{}", entry.date_string(), safe_title)
    }
}

/// Write one entry to `path`, appending the format's extension when missing.
///
/// Returns the path actually written.
pub fn export_entry_to_file(entry: &Entry, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    let suffix = format!(".{}", format.extension());
    let target = if path
        .to_string_lossy()
        .to_lowercase()
        .ends_with(&suffix)
    {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(&suffix);
        PathBuf::from(raw)
    };

    fs::write(&target, render_entry(entry))?;
    tracing::debug!(id = %entry.id, path = %target.display(), "exported entry");
    Ok(target)
}

/// Write every entry into `folder` (created if missing), one file each.
///
/// Returns the written paths in the order of `entries`.
pub fn export_all_to_folder(
    entries: &[Entry],
    folder: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(folder)?;
    entries
        .iter()
        .map(|entry| export_entry_to_file(entry, &folder.join(default_file_stem(entry)), format))
        .collect()
}
