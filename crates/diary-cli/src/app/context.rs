//! Application context for the Diary CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use diary_core::storage::{open_backend, StorageEngine};

use crate::cli::Cli;
use crate::config::DiaryConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_storage, StorageTarget};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DiaryConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&DiaryConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Get the configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.editor.as_deref())
    }

    pub fn storage_target(&self) -> anyhow::Result<StorageTarget> {
        resolve_storage(self.cli, self.config()?)
    }

    /// Open the configured backend, creating the parent directory if needed.
    pub fn open_storage(&self) -> anyhow::Result<Box<dyn StorageEngine>> {
        let target = self.storage_target()?;
        if let Some(parent) = target.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
                })?;
            }
        }
        Ok(open_backend(target.kind, &target.path)?)
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        Ok(UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
        )?)
    }

    /// UI context for error reporting; never fails.
    pub fn error_ui_context(&self) -> UiContext {
        UiContext::fallback(self.cli.no_color, self.cli.ascii)
    }
}
