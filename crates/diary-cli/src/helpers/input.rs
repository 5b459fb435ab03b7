//! Entry body reading.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ui::prompt::prompt_multiline;

/// Read entry body from --body flag, stdin, $EDITOR, or an inline prompt.
///
/// An empty body is valid; only I/O and editor failures are errors.
pub fn read_entry_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer.trim_end().to_string());
    }

    if no_input {
        return Ok(String::new());
    }

    match resolve_editor(editor_override) {
        Some(editor) => read_body_from_editor(&editor),
        None => prompt_multiline("Write your entry. End with a single line containing only '.'"),
    }
}

fn resolve_editor(editor_override: Option<&str>) -> Option<String> {
    editor_override
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|value| !value.trim().is_empty())
}

/// Open the editor on a scratch file and return what was saved.
fn read_body_from_editor(editor: &str) -> anyhow::Result<String> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("diary_entry_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, "").map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    // Allow editor commands with arguments, e.g. "code --wait".
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor {}: {}", program, e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    Ok(contents.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_flag_wins() {
        let body = read_entry_body(true, Some("from flag".to_string()), None).unwrap();
        assert_eq!(body, "from flag");
    }

    #[test]
    fn test_empty_body_flag_allowed() {
        assert_eq!(read_entry_body(true, Some(String::new()), None).unwrap(), "");
    }

    #[test]
    fn test_editor_override_takes_precedence() {
        assert_eq!(resolve_editor(Some("nano")).as_deref(), Some("nano"));
    }
}
