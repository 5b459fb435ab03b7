//! Text and table output formatting for entries.

use diary_core::storage::Entry;

use crate::ui::format::{clip, tags_display, wrap, TITLE_COLUMN_WIDTH};
use crate::ui::render::highlight_matches;
use crate::ui::{
    blank_line, divider, format_datetime, kv, print, short_id, simple_table, single_line,
    truncate, Column, OutputMode, UiContext,
};

/// Columns of the entry list table.
pub const LIST_COLUMNS: [Column; 5] = [
    Column::new("ID"),
    Column::new("Date"),
    Column::new("Title"),
    Column::new("Tags"),
    Column::new("Mood"),
];

/// Table rows for an entry list: id, date, title, tags, mood.
///
/// Pretty rows use short ids and ellipsized titles; plain rows keep the
/// full id and the first 30 title characters. `highlight` marks matches
/// of a search keyword when color is enabled.
pub fn entry_rows(ctx: &UiContext, entries: &[Entry], highlight: Option<&str>) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            let title = single_line(&entry.title);
            if ctx.mode.is_pretty() {
                let title = truncate(&title, TITLE_COLUMN_WIDTH);
                let title = match highlight {
                    Some(needle) => highlight_matches(&title, needle, ctx.color),
                    None => title,
                };
                vec![
                    short_id(&entry.id),
                    entry.date_string(),
                    title,
                    tags_display(&entry.tags),
                    single_line(&entry.mood),
                ]
            } else {
                vec![
                    entry.id.to_string(),
                    entry.date_string(),
                    clip(&title, TITLE_COLUMN_WIDTH),
                    entry.tags.join(","),
                    single_line(&entry.mood),
                ]
            }
        })
        .collect()
}

/// Print an entry list as a table (pretty) or tab-separated rows (plain).
pub fn print_entry_list(ctx: &UiContext, entries: &[Entry], highlight: Option<&str>) {
    let rows = entry_rows(ctx, entries, highlight);
    print(ctx, &simple_table(ctx, &LIST_COLUMNS, &rows));
}

/// Print a single entry: metadata block, then the body.
pub fn print_entry(ctx: &UiContext, entry: &Entry, quiet: bool) {
    match ctx.mode {
        OutputMode::Pretty => {
            if !quiet {
                print(ctx, &kv(ctx, "ID", &entry.id.to_string()));
                print(ctx, &kv(ctx, "Date", &entry.date_string()));
                print(ctx, &kv(ctx, "Title", &entry.title));
                print(ctx, &kv(ctx, "Mood", &entry.mood));
                print(ctx, &kv(ctx, "Tags", &tags_display(&entry.tags)));
                print(
                    ctx,
                    &kv(ctx, "Created", &format_datetime(&entry.created_at, true)),
                );
                if entry.updated_at != entry.created_at {
                    print(
                        ctx,
                        &kv(ctx, "Updated", &format_datetime(&entry.updated_at, true)),
                    );
                }
                blank_line(ctx);
                print(ctx, &divider(ctx));
                blank_line(ctx);
            }
            for line in wrap(&entry.body, ctx.width.clamp(20, 100)) {
                println!("{}", line);
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            if !quiet {
                println!("id={}", entry.id);
                println!("date={}", entry.date_string());
                println!("title={}", single_line(&entry.title));
                println!("mood={}", single_line(&entry.mood));
                println!("tags={}", entry.tags.join(","));
                println!("created_at={}", format_datetime(&entry.created_at, false));
                println!("updated_at={}", format_datetime(&entry.updated_at, false));
                println!();
            }
            println!("{}", entry.body);
        }
    }
}
