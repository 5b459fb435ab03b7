use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

use crate::constants::DEFAULT_EXPORT_DIR;

/// Diary - a CLI-first personal journal with SQLite or JSON storage
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage backend to use
    #[arg(long, global = true, env = "DIARY_STORAGE", value_parser = ["sqlite", "json"])]
    pub storage: Option<String>,

    /// SQLite database path (when storage=sqlite)
    #[arg(long, global = true, env = "DIARY_DB", value_name = "PATH")]
    pub db: Option<String>,

    /// JSON file path (when storage=json)
    #[arg(long, global = true, env = "DIARY_FILE", value_name = "PATH")]
    pub file: Option<String>,

    /// Config file path
    #[arg(long, global = true, env = "DIARY_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Entry title
    #[arg(long)]
    pub title: Option<String>,

    /// Entry body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Mood label
    #[arg(long)]
    pub mood: Option<String>,

    /// Add a tag (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Comma-separated tags
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// New mood
    #[arg(long)]
    pub mood: Option<String>,

    /// Replace tags (comma-separated)
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `date` command
#[derive(Args)]
pub struct DateArgs {
    /// Date to read (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword (case-insensitive substring of title, body, or a tag)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Export only this entry
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Output format (txt, md)
    #[arg(long, default_value = "md")]
    pub format: String,

    /// Output file for a single entry (extension added if missing)
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Target folder when exporting all entries
    #[arg(long, value_name = "DIR", default_value = DEFAULT_EXPORT_DIR)]
    pub dir: String,
}

/// Arguments for the `moods` command
#[derive(Args)]
pub struct MoodsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add(AddArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Read all entries for a date
    Date(DateArgs),

    /// Search entries by keyword
    Search(SearchArgs),

    /// List all entries, newest first
    List(ListArgs),

    /// Edit an existing entry (unspecified fields keep their values)
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Export entries to .txt or .md files
    Export(ExportArgs),

    /// Mood tracker: how often each mood was recorded
    Moods(MoodsArgs),

    /// Interactive menu
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
