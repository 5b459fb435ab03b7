use diary_core::storage::NewEntry;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{parse_date, parse_entry_id, parse_tags};
use crate::ui::{badge, print, Badge};

use super::entry_not_found;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let mut storage = ctx.open_storage()?;
    let current = storage
        .get_entry(&id)?
        .ok_or_else(|| entry_not_found(&id))?;

    let mut fields = NewEntry::from(&current);
    if let Some(date) = date {
        fields.date = Some(date);
    }
    if let Some(title) = &args.title {
        fields.title = title.trim().to_string();
    }
    if let Some(body) = &args.body {
        fields.body = body.clone();
    }
    if let Some(mood) = &args.mood {
        fields.mood = mood.trim().to_string();
    }
    if let Some(tags) = &args.tags {
        fields.tags = parse_tags(tags);
    }

    if !storage.update_entry(&id, &fields)? {
        return Err(entry_not_found(&id).into());
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Updated"));
        } else {
            println!("Updated");
        }
    }
    Ok(())
}
