//! Interactive menu: a loop over the entry commands driven by prompts.
//!
//! Each action builds the same argument structs the subcommands use, so
//! the menu and the flag-driven commands share one code path. A failing
//! action is reported and the loop continues.

use crate::app::AppContext;
use crate::cli::{
    AddArgs, DateArgs, DeleteArgs, EditArgs, ExportArgs, ListArgs, MoodsArgs, SearchArgs,
};
use crate::constants::DEFAULT_EXPORT_DIR;
use crate::helpers::parse_entry_id;
use crate::ui::prompt::{prompt_input, prompt_multiline, prompt_select};
use crate::ui::{print, print_error};

use super::entries::{self, entry_not_found};
use super::moods;

const ACTIONS: [&str; 9] = [
    "Add new entry",
    "Read entries by date",
    "Search entries by keyword",
    "List all entries",
    "Export (single/all)",
    "Edit an entry",
    "Delete an entry",
    "Mood tracker / stats",
    "Quit",
];

const QUIT: usize = ACTIONS.len() - 1;

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let mut last = 0;

    loop {
        println!();
        let choice = prompt_select("Terminal Diary", &ACTIONS, last)?;
        if choice == QUIT {
            print(&ui_ctx, "Goodbye!");
            return Ok(());
        }
        last = choice;

        if let Err(e) = run_action(ctx, choice) {
            tracing::debug!(action = ACTIONS[choice], error = %e, "menu action failed");
            print_error(&ctx.error_ui_context(), &e.to_string(), None);
        }
    }
}

fn run_action(ctx: &AppContext, choice: usize) -> anyhow::Result<()> {
    match choice {
        0 => add(ctx),
        1 => entries::handle_date(
            ctx,
            &DateArgs {
                date: prompt_input("Date (YYYY-MM-DD)", None)?,
                json: false,
            },
        ),
        2 => entries::handle_search(
            ctx,
            &SearchArgs {
                keyword: prompt_input("Keyword to search", None)?,
                limit: None,
                json: false,
                format: None,
            },
        ),
        3 => entries::handle_list(
            ctx,
            &ListArgs {
                limit: None,
                json: false,
                format: None,
            },
        ),
        4 => export(ctx),
        5 => edit(ctx),
        6 => entries::handle_delete(
            ctx,
            &DeleteArgs {
                id: prompt_input("Entry ID to delete", None)?,
                yes: false,
            },
        ),
        7 => moods::handle_moods(ctx, &MoodsArgs { json: false }),
        _ => Ok(()),
    }
}

/// Blank input means "not given".
fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn add(ctx: &AppContext) -> anyhow::Result<()> {
    let date = optional(prompt_input("Date (YYYY-MM-DD) [default today]", None)?);
    let title = prompt_input("Title", None)?;
    let body = prompt_multiline("Write your entry. End with a single line containing only '.'")?;
    let mood = prompt_input("Mood (optional)", None)?;
    let tags = optional(prompt_input("Tags (comma separated, optional)", None)?);

    entries::handle_add(
        ctx,
        &AddArgs {
            date,
            title: Some(title),
            body: Some(body),
            mood: Some(mood),
            tag: Vec::new(),
            tags,
            no_input: true,
        },
    )
}

fn edit(ctx: &AppContext) -> anyhow::Result<()> {
    let raw_id = prompt_input("Entry ID to edit", None)?;
    let id = parse_entry_id(&raw_id)?;
    let current = ctx
        .open_storage()?
        .get_entry(&id)?
        .ok_or_else(|| entry_not_found(&id))?;

    println!("Leave blank to keep existing value");
    let date = prompt_input("Date (YYYY-MM-DD)", Some(&current.date_string()))?;
    let title = prompt_input("Title", Some(&current.title))?;
    let body = prompt_multiline(
        "Enter body. End with a single line containing only '.' (leave blank to keep current)",
    )?;
    let mood = prompt_input("Mood", Some(&current.mood))?;
    let tags = prompt_input("Tags comma-separated", Some(&current.tags.join(",")))?;

    entries::handle_edit(
        ctx,
        &EditArgs {
            id: raw_id,
            date: optional(date),
            title: Some(title),
            body: if body.trim().is_empty() { None } else { Some(body) },
            mood: Some(mood),
            tags: Some(tags),
        },
    )
}

fn export(ctx: &AppContext) -> anyhow::Result<()> {
    let scope = prompt_select("Export", &["Single entry", "All entries"], 0)?;
    let format = ["md", "txt"][prompt_select("Format", &["md", "txt"], 0)?].to_string();

    let args = if scope == 0 {
        ExportArgs {
            id: Some(prompt_input("Entry ID", None)?),
            format,
            out: optional(prompt_input(
                "Export path (without extension) [default: ./<date>-<title>]",
                None,
            )?),
            dir: DEFAULT_EXPORT_DIR.to_string(),
        }
    } else {
        ExportArgs {
            id: None,
            format,
            out: None,
            dir: prompt_input("Target folder", Some(DEFAULT_EXPORT_DIR))?,
        }
    };
    entries::handle_export(ctx, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_end_with_quit() {
        assert_eq!(ACTIONS.len(), 9);
        assert_eq!(ACTIONS[QUIT], "Quit");
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional("   ".to_string()), None);
        assert_eq!(optional(" x ".to_string()), Some("x".to_string()));
    }
}
