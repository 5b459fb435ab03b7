use crate::app::AppContext;
use crate::cli::DateArgs;
use crate::helpers::parse_date;
use crate::output::{entries_json, print_entry, print_json};
use crate::ui::{blank_line, divider, header, print};

pub fn handle_date(ctx: &AppContext, args: &DateArgs) -> anyhow::Result<()> {
    let date = parse_date(&args.date)?;
    let ui_ctx = ctx.ui_context(args.json, None)?;

    let storage = ctx.open_storage()?;
    let entries = storage.get_entries_by_date(date)?;

    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(&entries));
    }

    let date_label = date.to_string();
    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "date", Some(&date_label)));
        blank_line(&ui_ctx);
    }

    if entries.is_empty() {
        print(&ui_ctx, "No entries for this date.");
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            blank_line(&ui_ctx);
            print(&ui_ctx, &divider(&ui_ctx));
            blank_line(&ui_ctx);
        }
        print_entry(&ui_ctx, entry, ctx.quiet());
    }
    Ok(())
}
