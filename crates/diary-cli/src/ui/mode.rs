//! Output mode routing logic.

use crate::errors::CliError;

/// Accepted values for `--format`.
pub const FORMATS: [&str; 2] = ["table", "plain"];

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything and cannot be combined with `--format`
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Result<Self, CliError> {
        if let Some(fmt) = format_flag {
            if !FORMATS.contains(&fmt) {
                return Err(CliError::invalid_input(format!(
                    "Invalid format: {} (use table or plain)",
                    fmt
                )));
            }
            if json_flag {
                return Err(CliError::invalid_input("--format cannot be used with --json"));
            }
        }

        if json_flag {
            return Ok(Self::Json);
        }
        if format_flag == Some("plain") || term_is_dumb {
            return Ok(Self::Plain);
        }

        Ok(if is_tty { Self::Pretty } else { Self::Plain })
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
