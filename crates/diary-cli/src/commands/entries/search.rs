use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::require_keyword;
use crate::output::{entries_json, print_entry_list, print_json};
use crate::ui::{blank_line, header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let keyword = require_keyword(&args.keyword)?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;

    let storage = ctx.open_storage()?;
    let mut entries = storage.search_entries(keyword)?;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(&entries));
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "search", Some(keyword)));
        blank_line(&ui_ctx);
    }

    if entries.is_empty() {
        print(&ui_ctx, "No results found");
        return Ok(());
    }

    print_entry_list(&ui_ctx, &entries, Some(keyword));
    Ok(())
}
