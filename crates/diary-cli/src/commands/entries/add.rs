use chrono::Utc;

use diary_core::storage::NewEntry;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{merge_tags, parse_date, read_entry_body};
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Utc::now().date_naive(),
    };
    let tags = merge_tags(&args.tag, args.tags.as_deref());
    let body = read_entry_body(args.no_input, args.body.clone(), ctx.editor()?)?;

    let draft = NewEntry::new(date)
        .with_title(args.title.as_deref().unwrap_or("").trim())
        .with_body(body)
        .with_mood(args.mood.as_deref().unwrap_or("").trim())
        .with_tags(tags);

    let mut storage = ctx.open_storage()?;
    let id = storage.add_entry(&draft)?;

    let ui_ctx = ctx.ui_context(false, None)?;
    if ctx.quiet() || !ui_ctx.mode.is_pretty() {
        println!("{}", id);
    } else {
        let id_text = id.to_string();
        let date_text = date.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Saved entry",
                &[("ID", id_text.as_str()), ("Date", date_text.as_str())],
            ),
        );
    }
    Ok(())
}
