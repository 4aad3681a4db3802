//! ICS feed parsing using the icalendar crate's parser.

use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{MergecalError, MergecalResult};

/// A date-valued property as found on a component.
///
/// `Invalid` means the property was present but its value could not be
/// read as a date or datetime. The normalizer treats that differently
/// from `Absent`, so the distinction has to survive parsing.
#[derive(Debug, Clone, Default)]
pub enum DateValue {
    #[default]
    Absent,
    Parsed(DatePerhapsTime),
    Invalid,
}

/// Typed snapshot of one VEVENT, decoupled from the parser's borrowed
/// component tree.
///
/// Only the fields the merge pipeline cares about are kept. Malformed
/// property values degrade field by field; they never fail the feed.
#[derive(Debug, Clone, Default)]
pub struct EventComponent {
    pub uid: Option<String>,
    pub summary: Option<String>,
    pub start: DateValue,
    pub end: DateValue,
    pub duration: Option<chrono::Duration>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Parse raw feed text into event components.
///
/// Failures, in the order they are checked: empty input, no VCALENDAR
/// marker (case-insensitive), grammar errors, and a calendar without a
/// single VEVENT.
pub fn parse_feed(raw: &str) -> MergecalResult<Vec<EventComponent>> {
    if raw.trim().is_empty() {
        return Err(MergecalError::EmptyFeed);
    }

    if !raw.to_uppercase().contains("BEGIN:VCALENDAR") {
        return Err(MergecalError::InvalidFormat);
    }

    let unfolded = unfold(raw);
    let calendar = read_calendar(&unfolded).map_err(MergecalError::Parse)?;

    let components: Vec<EventComponent> = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(to_event_component)
        .collect();

    if components.is_empty() {
        return Err(MergecalError::NoEvents);
    }

    Ok(components)
}

fn to_event_component(vevent: &Component) -> EventComponent {
    EventComponent {
        uid: prop_value(vevent, "UID"),
        summary: prop_value(vevent, "SUMMARY"),
        start: date_value(vevent, "DTSTART"),
        end: date_value(vevent, "DTEND"),
        duration: vevent
            .find_prop("DURATION")
            .and_then(|p| parse_duration(p.val.as_ref())),
        description: prop_value(vevent, "DESCRIPTION"),
        location: prop_value(vevent, "LOCATION"),
    }
}

fn prop_value(vevent: &Component, name: &str) -> Option<String> {
    vevent.find_prop(name).map(|p| p.val.to_string())
}

fn date_value(vevent: &Component, name: &str) -> DateValue {
    match vevent.find_prop(name) {
        None => DateValue::Absent,
        Some(prop) => match DatePerhapsTime::try_from(prop) {
            Ok(value) => DateValue::Parsed(value),
            Err(_) => DateValue::Invalid,
        },
    }
}

/// Parse an ISO 8601 duration value (PT1H30M, P1D, etc.)
fn parse_duration(value: &str) -> Option<chrono::Duration> {
    let is_negative = value.starts_with('-');
    let duration_str = value.trim_start_matches('-');

    let duration = iso8601::duration(duration_str).ok()?;
    let std_duration: std::time::Duration = duration.into();
    let duration = chrono::Duration::from_std(std_duration).ok()?;

    Some(if is_negative { -duration } else { duration })
}
