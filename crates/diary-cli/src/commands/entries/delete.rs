use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::parse_entry_id;
use crate::ui::prompt::prompt_confirm;
use crate::ui::{badge, print, Badge};

use super::entry_not_found;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let ui_ctx = ctx.ui_context(false, None)?;

    let mut storage = ctx.open_storage()?;
    let entry = storage
        .get_entry(&id)?
        .ok_or_else(|| entry_not_found(&id))?;

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation; pass --yes",
            )
            .into());
        }
        let label = if entry.title.is_empty() {
            entry.date_string()
        } else {
            format!("{} ({})", entry.title, entry.date_string())
        };
        if !prompt_confirm(&format!("Delete \"{}\"?", label), false)? {
            print(&ui_ctx, "Canceled");
            return Ok(());
        }
    }

    if !storage.delete_entry(&id)? {
        return Err(entry_not_found(&id).into());
    }

    if !ctx.quiet() {
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Deleted"));
        } else {
            println!("Deleted");
        }
    }
    Ok(())
}
