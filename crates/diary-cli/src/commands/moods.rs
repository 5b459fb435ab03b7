use diary_core::mood::mood_counts;

use crate::app::AppContext;
use crate::cli::MoodsArgs;
use crate::output::print_json;
use crate::ui::{blank_line, header, print, simple_table, Column};

const MOOD_COLUMNS: [Column; 2] = [Column::new("Mood"), Column::new("Count")];

pub fn handle_moods(ctx: &AppContext, args: &MoodsArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None)?;

    let storage = ctx.open_storage()?;
    let counts = mood_counts(&storage.list_entries()?);

    if ui_ctx.mode.is_json() {
        return print_json(&counts);
    }

    if counts.is_empty() {
        print(&ui_ctx, "No mood data yet");
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        if !ctx.quiet() {
            print(&ui_ctx, &header(&ui_ctx, "moods", None));
            blank_line(&ui_ctx);
        }
        let rows: Vec<Vec<String>> = counts
            .iter()
            .map(|c| vec![c.mood.clone(), c.count.to_string()])
            .collect();
        print(&ui_ctx, &simple_table(&ui_ctx, &MOOD_COLUMNS, &rows));
    } else {
        println!("Mood counts:");
        for c in &counts {
            println!("{}: {}", c.mood, c.count);
        }
    }
    Ok(())
}
