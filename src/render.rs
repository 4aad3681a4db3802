//! Colored terminal rendering for mergecal types, via owo_colors.

use mergecal_core::{Calendar, DisplayMode};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Calendar {
    fn render(&self) -> String {
        let mut parts = vec![format!("📅 {}", self.name)];

        match self.display_mode {
            DisplayMode::Original => {}
            DisplayMode::Busy => parts.push("[busy]".yellow().to_string()),
            DisplayMode::Custom => {
                let text = self.custom_text.as_deref().unwrap_or("");
                parts.push(format!("[custom: {}]", text).yellow().to_string());
            }
        }

        if !self.visible {
            parts.push("(hidden)".dimmed().to_string());
        }

        parts.join(" ")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "calendar" => "calendars",
            _ => word,
        }
    }
}
