//! Prompt primitives for the interactive menu.
//!
//! Every prompt refuses to run without a terminal on stdin so scripted
//! invocations fail fast instead of blocking.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

fn require_terminal(what: &str) -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Interactive {} required. Use flags or run on a TTY.",
            what
        ))
    }
}

/// Prompt for a line of text. Empty input is allowed.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    require_terminal("input")?;

    let theme = ColorfulTheme::default();
    let mut builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(def) = default {
        builder = builder.default(def.to_string());
    }

    Ok(builder.interact_text()?)
}

/// Prompt for selection from a list of options.
pub fn prompt_select(prompt: &str, options: &[&str], default: usize) -> anyhow::Result<usize> {
    require_terminal("selection")?;

    let theme = ColorfulTheme::default();
    let result = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Prompt for confirmation.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_terminal("confirmation")?;

    let theme = ColorfulTheme::default();
    let result = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Read a multi-line body, ending at a line containing only `.`.
pub fn prompt_multiline(prompt: &str) -> anyhow::Result<String> {
    require_terminal("input")?;
    println!("{}", prompt);
    read_until_dot(std::io::stdin().lock())
}

/// Collect lines until a lone `.` line or end of input.
pub fn read_until_dot(reader: impl std::io::BufRead) -> anyhow::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if line.trim_end_matches('\r') == "." {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
