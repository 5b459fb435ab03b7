use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::parse_entry_id;
use crate::output::{entry_json, print_entry, print_json};
use crate::ui::{blank_line, header, print};

use super::entry_not_found;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let ui_ctx = ctx.ui_context(args.json, None)?;

    let storage = ctx.open_storage()?;
    let entry = storage
        .get_entry(&id)?
        .ok_or_else(|| entry_not_found(&id))?;

    if ui_ctx.mode.is_json() {
        return print_json(&entry_json(&entry));
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "show", None));
        blank_line(&ui_ctx);
    }
    print_entry(&ui_ctx, &entry, ctx.quiet());
    Ok(())
}
