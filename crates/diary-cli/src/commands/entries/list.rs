use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, print_entry_list, print_json};
use crate::ui::{blank_line, header_with_context, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let target = ctx.storage_target()?;

    let storage = ctx.open_storage()?;
    let mut entries = storage.list_entries()?;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(&entries));
    }

    let pretty = ui_ctx.mode.is_pretty() && !ctx.quiet();
    if pretty {
        let path = target.path.display().to_string();
        print(
            &ui_ctx,
            &header_with_context(&ui_ctx, "list", Some(storage.backend_name()), Some(&path)),
        );
        blank_line(&ui_ctx);
    }

    if entries.is_empty() {
        print(&ui_ctx, "No entries yet.");
        if pretty {
            print(&ui_ctx, &hint(&ui_ctx, "diary add --title \"...\" --body \"...\""));
        }
        return Ok(());
    }

    print_entry_list(&ui_ctx, &entries, None);
    if pretty {
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &hint(&ui_ctx, &format!("diary show {}", entries[0].id)),
        );
    }
    Ok(())
}
