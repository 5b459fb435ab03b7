//! Badge tokens and text styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Err => "[\u{2717}]",  // [✗]
        }
    }

    /// Color for this badge.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green().bold(),
            Self::Err => Style::new().red().bold(),
        }
    }
}

/// Shared text styles.
pub mod styles {
    use owo_colors::Style;

    /// Labels and metadata.
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    /// Titles and emphasized values.
    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Search match highlight.
    pub fn highlight() -> Style {
        Style::new().yellow().bold()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
