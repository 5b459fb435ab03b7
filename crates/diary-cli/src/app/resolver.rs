//! Path resolution for the config file and the diary storage file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use diary_core::storage::BackendKind;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, xdg_data_dir, DiaryConfig, StorageSection};
use crate::errors::CliError;

/// Which backend to open, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTarget {
    pub kind: BackendKind,
    pub path: PathBuf,
}

/// Resolve the config file path: `--config` / `DIARY_CONFIG`, else the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

/// Load the config file, treating a missing default file as empty.
///
/// An explicitly named config file must exist.
pub fn load_config(cli: &Cli) -> anyhow::Result<DiaryConfig> {
    let path = resolve_config_path(cli)?;
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        return read_config(&path);
    }
    if cli.config.is_some() {
        return Err(CliError::not_found(
            format!("Config file not found: {}", path.display()),
            "Hint: Check --config or DIARY_CONFIG, or remove it to use defaults.",
        )
        .into());
    }
    Ok(DiaryConfig::default())
}

/// Resolve backend and file path from flags/env, then config, then defaults.
pub fn resolve_storage(cli: &Cli, config: &DiaryConfig) -> anyhow::Result<StorageTarget> {
    let data_dir = xdg_data_dir()?;
    select_storage(
        cli.storage.as_deref(),
        cli.db.as_deref(),
        cli.file.as_deref(),
        &config.storage,
        &data_dir,
    )
}

fn select_storage(
    storage_flag: Option<&str>,
    db_flag: Option<&str>,
    file_flag: Option<&str>,
    config: &StorageSection,
    data_dir: &Path,
) -> anyhow::Result<StorageTarget> {
    let kind = match storage_flag {
        Some(value) => BackendKind::from_str(value)?,
        None => config.backend.unwrap_or_default(),
    };

    let flag_path = match kind {
        BackendKind::Sqlite => db_flag,
        BackendKind::Json => file_flag,
    };
    // The config path belongs to the configured backend only.
    let config_path = config
        .path
        .as_deref()
        .filter(|_| config.backend.map_or(true, |configured| configured == kind));

    let path = match flag_path.or(config_path) {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => data_dir.join(kind.default_file_name()),
    };

    Ok(StorageTarget { kind, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        PathBuf::from("/data/diary")
    }

    #[test]
    fn test_defaults_to_sqlite_in_data_dir() {
        let target = select_storage(None, None, None, &StorageSection::default(), &data_dir())
            .unwrap();
        assert_eq!(target.kind, BackendKind::Sqlite);
        assert_eq!(target.path, data_dir().join("diary.db"));
    }

    #[test]
    fn test_json_flag_uses_file_flag() {
        let target = select_storage(
            Some("json"),
            Some("/tmp/x.db"),
            Some("/tmp/x.json"),
            &StorageSection::default(),
            &data_dir(),
        )
        .unwrap();
        assert_eq!(target.kind, BackendKind::Json);
        assert_eq!(target.path, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn test_json_default_file_name() {
        let target = select_storage(Some("json"), Some("/tmp/x.db"), None, &StorageSection::default(), &data_dir())
            .unwrap();
        assert_eq!(target.path, data_dir().join("diary.json"));
    }

    #[test]
    fn test_config_backend_and_path() {
        let config = StorageSection {
            backend: Some(BackendKind::Json),
            path: Some("/srv/diary.json".to_string()),
        };
        let target = select_storage(None, None, None, &config, &data_dir()).unwrap();
        assert_eq!(target.kind, BackendKind::Json);
        assert_eq!(target.path, PathBuf::from("/srv/diary.json"));
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = StorageSection {
            backend: Some(BackendKind::Json),
            path: Some("/srv/diary.json".to_string()),
        };
        let target = select_storage(Some("sqlite"), None, None, &config, &data_dir()).unwrap();
        assert_eq!(target.kind, BackendKind::Sqlite);
        assert_eq!(target.path, data_dir().join("diary.db"));

        let target =
            select_storage(None, None, Some("/tmp/other.json"), &config, &data_dir()).unwrap();
        assert_eq!(target.path, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_config_path_without_backend_applies() {
        let config = StorageSection {
            backend: None,
            path: Some("/srv/diary.db".to_string()),
        };
        let target = select_storage(None, None, None, &config, &data_dir()).unwrap();
        assert_eq!(target.path, PathBuf::from("/srv/diary.db"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = select_storage(Some("redis"), None, None, &StorageSection::default(), &data_dir())
            .unwrap_err();
        assert!(err.to_string().contains("Unknown storage backend"));
    }
}
