//! Helper functions for CLI argument handling.

mod input;
mod parsing;

pub use input::read_entry_body;
pub use parsing::{merge_tags, parse_date, parse_entry_id, parse_tags, require_keyword};
