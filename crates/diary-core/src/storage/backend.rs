//! Backend selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::json::JsonStorage;
use super::sqlite::SqliteStorage;
use super::traits::StorageEngine;
use crate::error::{DiaryError, Result};

/// Which storage backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// SQLite database file
    #[default]
    Sqlite,
    /// Single JSON document file
    Json,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Sqlite, BackendKind::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
        }
    }

    /// File name used when no explicit path is configured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Sqlite => "diary.db",
            Self::Json => "diary.json",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = DiaryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "json" => Ok(Self::Json),
            other => Err(DiaryError::InvalidInput(format!(
                "Unknown storage backend: {} (use sqlite or json)",
                other
            ))),
        }
    }
}

/// Open the configured backend at `path`.
pub fn open_backend(kind: BackendKind, path: &Path) -> Result<Box<dyn StorageEngine>> {
    tracing::debug!(backend = %kind, path = %path.display(), "opening storage backend");
    Ok(match kind {
        BackendKind::Sqlite => Box::new(SqliteStorage::open(path)?),
        BackendKind::Json => Box::new(JsonStorage::open(path)?),
    })
}
