//! Error types for the mergecal pipeline.

use thiserror::Error;

/// Errors that can occur while ingesting, storing, or exporting feeds.
///
/// The `Display` messages are the user-facing strings; the CLI surfaces
/// them verbatim when adding a calendar fails.
#[derive(Error, Debug)]
pub enum MergecalError {
    /// Direct and relay retrieval both failed before any response arrived.
    #[error("Failed to fetch calendar: {0}")]
    Fetch(String),

    /// Direct and relay retrieval both failed; carries the final HTTP status.
    #[error("Failed to fetch calendar ({status}): {reason}")]
    FetchStatus { status: u16, reason: String },

    #[error("Calendar data is empty. Please check the URL and try again.")]
    EmptyFeed,

    #[error("Invalid calendar format: The URL does not provide a valid iCal file.")]
    InvalidFormat,

    /// The feed looked like iCal but the grammar parse failed.
    #[error("Failed to parse calendar: {0}")]
    Parse(String),

    /// The feed parsed but contained no VEVENT components.
    #[error("No events found in the calendar. Please check the URL and try again.")]
    NoEvents,

    /// Every VEVENT was dropped during normalization.
    #[error("No valid events found in the calendar. Please check the URL and try again.")]
    NoValidEvents,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for mergecal operations.
pub type MergecalResult<T> = Result<T, MergecalError>;
