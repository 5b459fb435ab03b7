use std::path::PathBuf;
use std::str::FromStr;

use diary_core::export::{
    default_file_stem, export_all_to_folder, export_entry_to_file, ExportFormat,
};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::parse_entry_id;
use crate::ui::{badge, print, Badge, UiContext};

use super::entry_not_found;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = ExportFormat::from_str(&args.format)?;
    let ui_ctx = ctx.ui_context(false, None)?;

    match args.id.as_deref() {
        Some(raw_id) => {
            let id = parse_entry_id(raw_id)?;
            let storage = ctx.open_storage()?;
            let entry = storage
                .get_entry(&id)?
                .ok_or_else(|| entry_not_found(&id))?;

            let path = match args.out.as_deref().map(str::trim) {
                Some(out) if !out.is_empty() => PathBuf::from(out),
                _ => PathBuf::from(".").join(default_file_stem(&entry)),
            };
            let written = export_entry_to_file(&entry, &path, format)?;
            report(ctx, &ui_ctx, &format!("Exported to {}", written.display()));
        }
        None => {
            if args.out.is_some() {
                return Err(CliError::invalid_input("--out requires --id").into());
            }
            let storage = ctx.open_storage()?;
            let entries = storage.export_all()?;
            let folder = PathBuf::from(&args.dir);
            let written = export_all_to_folder(&entries, &folder, format)?;
            report(
                ctx,
                &ui_ctx,
                &format!("Exported {} entries to {}", written.len(), folder.display()),
            );
        }
    }
    Ok(())
}

fn report(ctx: &AppContext, ui_ctx: &UiContext, message: &str) {
    if ctx.quiet() {
        return;
    }
    if ui_ctx.mode.is_pretty() {
        print(ui_ctx, &badge(ui_ctx, Badge::Ok, message));
    } else {
        println!("{}", message);
    }
}
