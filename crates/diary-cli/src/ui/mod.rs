//! UI primitives for the Diary CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and owo-colors styles
//! - **Render**: Tables, headers, receipts, hints, formatted text
//! - **Prompt**: dialoguer wrappers for the interactive menu
//! - **Format**: String utilities (truncate, wrap, short ids)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, OutputMode};
//! use crate::ui::render::{header, simple_table, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii)?;
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "diary show <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, divider, header, header_with_context, hint, kv, print, print_error,
    receipt, simple_table, Column,
};

// Re-export commonly used format functions
pub use format::{format_datetime, short_id, single_line, truncate};
