//! Mapping parsed VEVENT components onto canonical events.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use icalendar::{CalendarDateTime, DatePerhapsTime};
use uuid::Uuid;

use crate::event::Event;
use crate::ics::{DateValue, EventComponent};

const UNTITLED: &str = "Untitled Event";

/// Turn raw components into events owned by `calendar_id`.
///
/// Components whose dates cannot be resolved are skipped with a warning;
/// one bad entry never fails the batch. The caller decides what an empty
/// result means.
pub fn normalize(components: Vec<EventComponent>, calendar_id: &str) -> Vec<Event> {
    components
        .into_iter()
        .filter_map(|component| {
            let summary = component.summary.clone();
            normalize_component(component, calendar_id).or_else(|| {
                log::warn!(
                    "Skipping event with invalid dates: {}",
                    summary.as_deref().unwrap_or(UNTITLED)
                );
                None
            })
        })
        .collect()
}

fn normalize_component(component: EventComponent, calendar_id: &str) -> Option<Event> {
    let start_value = match component.start {
        DateValue::Parsed(value) => value,
        DateValue::Absent | DateValue::Invalid => return None,
    };

    let all_day = matches!(start_value, DatePerhapsTime::Date(_));
    let start = to_instant(&start_value);

    let end = match component.end {
        DateValue::Parsed(value) => to_instant(&value),
        DateValue::Invalid => return None,
        DateValue::Absent => match component.duration {
            Some(duration) => start + duration,
            None if all_day => start + Duration::days(1),
            None => start,
        },
    };

    Some(Event {
        id: component
            .uid
            .filter(|uid| !uid.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: component
            .summary
            .filter(|summary| !summary.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        start,
        end,
        calendar_id: calendar_id.to_string(),
        description: component.description.filter(|text| !text.is_empty()),
        location: component.location.filter(|text| !text.is_empty()),
        all_day,
    })
}

/// Collapse a parsed date or datetime to a UTC instant.
///
/// Date-only values become midnight UTC. Floating and zoned local times
/// are read as UTC; we do not resolve TZID databases here.
fn to_instant(value: &DatePerhapsTime) -> DateTime<Utc> {
    match value {
        DatePerhapsTime::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(instant)) => *instant,
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => naive.and_utc(),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            date_time.and_utc()
        }
    }
}
