//! Canonical event records.
//!
//! Events are produced in batches by feed ingestion and tied to their
//! owning calendar by id. They are never mutated afterwards; display
//! adjustments happen transiently during projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single normalized calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Source UID when the feed provided one, otherwise a generated UUID.
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Foreign key into the registry's calendar set.
    pub calendar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// True when the source start was a pure calendar date.
    #[serde(default)]
    pub all_day: bool,
}
