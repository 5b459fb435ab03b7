//! Terminal detection: tty, color, glyphs, width, and the resolved output mode.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::errors::CliError;

/// What the current terminal allows, resolved once per command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    /// False under `--no-color`, `NO_COLOR`, `TERM=dumb`, or a pipe
    pub color: bool,
    /// False under `--ascii`
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Resolve the context for one command's output flags.
    ///
    /// Fails only when `--format` is unknown or combined with `--json`.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Result<Self, CliError> {
        let is_tty = std::io::stdout().is_terminal();
        let dumb = term_is_dumb();
        let mode = OutputMode::resolve(json_flag, format_flag, is_tty, dumb)?;

        Ok(Self {
            is_tty,
            color: is_tty && !dumb && !no_color_flag && !no_color_env(),
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(DEFAULT_WIDTH),
            mode,
        })
    }

    /// Context for printing an error to stderr. Never fails, so a bad
    /// `--format` can still be reported.
    pub fn fallback(no_color_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env(),
            unicode: !ascii_flag,
            width: DEFAULT_WIDTH,
            mode: if is_tty {
                OutputMode::Pretty
            } else {
                OutputMode::Plain
            },
        }
    }

    /// Prompts need a terminal on both ends.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

const DEFAULT_WIDTH: usize = 80;

fn term_is_dumb() -> bool {
    std::env::var("TERM").is_ok_and(|term| term == "dumb")
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// `COLUMNS` wins over the tty size so output can be pinned in scripts.
fn terminal_width() -> Option<usize> {
    columns_env().or_else(tty_columns)
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn tty_columns() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ writes a winsize into the pointer and nothing else.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: rc == 0 means the kernel filled the struct.
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn tty_columns() -> Option<usize> {
    None
}
