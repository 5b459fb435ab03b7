//! Diary CLI - a personal journal backed by SQLite or a JSON document.
//!
//! This is the command-line interface for Diary. It provides the flag-driven
//! subcommands and the interactive menu on top of `diary-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use diary_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, menu, misc, moods};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let (message, hint) = split_error_hint(&format!("{}", e));
        print_error(&ctx.error_ui_context(), &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an error message at its "Hint:" line, or supply a contextual hint.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (error[..idx].to_string(), Some(error[idx + 1..].to_string()));
    }

    let error_lower = error.to_lowercase();
    let hint = if error_lower.contains("invalid entry id") {
        Some("Hint: Entry IDs are full UUIDs, as printed by `diary add` and `diary list --format plain`.")
    } else if error_lower.contains("database is locked") {
        Some("Hint: Another process is using the diary database; try again.")
    } else if error_lower.contains("failed to parse config") {
        Some("Hint: Check the [storage] and [ui] sections of your config.toml.")
    } else {
        None
    };

    (error.to_string(), hint.map(String::from))
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => entries::handle_add(ctx, args),
        Some(Commands::Show(args)) => entries::handle_show(ctx, args),
        Some(Commands::Date(args)) => entries::handle_date(ctx, args),
        Some(Commands::Search(args)) => entries::handle_search(ctx, args),
        Some(Commands::List(args)) => entries::handle_list(ctx, args),
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args),
        Some(Commands::Export(args)) => entries::handle_export(ctx, args),
        Some(Commands::Moods(args)) => moods::handle_moods(ctx, args),
        Some(Commands::Menu) => menu::handle_menu(ctx),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() => {
            menu::handle_menu(ctx)
        }
        None => {
            println!("Diary v{}", VERSION);
            println!("\nQuickstart:");
            println!("  diary add --title \"Walk\" --body \"Went for a walk\" --tags outdoors");
            println!("  diary list");
            println!("  diary search walk");
            println!("  diary date 2024-01-15");
            println!("  diary show <id>");
            println!("\nRun `diary` on a terminal for the interactive menu, or `diary --help` for full usage.");
            Ok(())
        }
    }
}
