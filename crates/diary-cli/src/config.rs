use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use diary_core::storage::BackendKind;

use crate::constants::APP_DIR_NAME;

/// Optional on-disk configuration (`config.toml`).
///
/// Every key is optional; a missing file behaves like an empty one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub backend: Option<BackendKind>,
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub editor: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DiaryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR_NAME));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR_NAME))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR_NAME));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR_NAME))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\nbackend = \"json\"\npath = \"/tmp/d.json\"\n\n[ui]\neditor = \"nano\"\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.storage.backend, Some(BackendKind::Json));
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/d.json"));
        assert_eq!(config.ui.editor.as_deref(), Some("nano"));
    }

    #[test]
    fn test_read_empty_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.storage.backend.is_none());
        assert!(config.storage.path.is_none());
        assert!(config.ui.editor.is_none());
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"redis\"\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
