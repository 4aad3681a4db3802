//! Subscribed calendar records and their display preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a calendar's events are titled in the merged view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Keep the source titles.
    #[default]
    Original,
    /// Replace every title with "Busy".
    Busy,
    /// Replace every title with the calendar's custom text.
    /// Empty or absent text falls back to the source title.
    Custom,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "original" => Ok(DisplayMode::Original),
            "busy" => Ok(DisplayMode::Busy),
            "custom" => Ok(DisplayMode::Custom),
            other => Err(format!(
                "unknown display mode '{other}' (expected original, busy, or custom)"
            )),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Original => write!(f, "original"),
            DisplayMode::Busy => write!(f, "busy"),
            DisplayMode::Custom => write!(f, "custom"),
        }
    }
}

/// A subscribed feed plus its display preferences.
///
/// The id is assigned once at creation and never changes; events reference
/// it as their foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    pub name: String,
    pub url: String,
    /// CSS color string used to tint this calendar's events.
    pub color: String,
    pub visible: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

impl Calendar {
    /// New calendar with a fresh id, a random color, and default display
    /// settings (visible, original titles).
    pub fn new(name: &str, url: &str) -> Self {
        Calendar {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            url: url.to_string(),
            color: random_color(),
            visible: true,
            display_mode: DisplayMode::Original,
            custom_text: None,
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Random hue at fixed saturation and lightness.
pub fn random_color() -> String {
    format!("hsl({}, 70%, 50%)", fastrand::u16(0..360))
}
