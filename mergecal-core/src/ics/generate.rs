//! Merged-feed ICS generation.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::project::VisibleEvent;

const PRODID: &str = "-//Merge Calendar//EN";

/// Serialize the merged view as one combined VCALENDAR.
///
/// Every timestamp is written as a UTC instant at second precision.
/// DESCRIPTION and LOCATION lines are only emitted when there is
/// something to say. What goes out is what the merged view shows, so
/// masked titles stay masked.
pub fn export_ics(events: &[VisibleEvent]) -> String {
    let mut cal = Calendar::new();
    let dtstamp = format_utc(&Utc::now());

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.id);
        ics_event.summary(&event.title);
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.add_property("DTSTART", format_utc(&event.start));
        ics_event.add_property("DTEND", format_utc(&event.end));

        if let Some(desc) = event.description.as_deref().filter(|d| !d.is_empty()) {
            ics_event.description(desc);
        }

        if let Some(loc) = event.location.as_deref().filter(|l| !l.is_empty()) {
            ics_event.location(loc);
        }

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    // Post-process to remove unnecessary bloat from the icalendar crate's output
    strip_ics_bloat(&cal.to_string())
}

fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn visible_event(id: &str, title: &str) -> VisibleEvent {
        VisibleEvent {
            id: id.to_string(),
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap(),
            description: None,
            location: None,
            all_day: false,
            color: "hsl(120, 70%, 50%)".to_string(),
            calendar_id: "cal-1".to_string(),
        }
    }

    #[test]
    fn test_export_wraps_events_in_one_vcalendar() {
        let events = vec![visible_event("e1", "Standup"), visible_event("e2", "Lunch")];

        let ics = export_ics(&events);

        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.contains("VERSION:2.0"));
        assert!(ics.contains("PRODID:-//Merge Calendar//EN"));
        assert!(!ics.contains("CALSCALE"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
    }

    #[test]
    fn test_export_uses_crlf_line_endings() {
        let ics = export_ics(&[visible_event("e1", "Standup")]);

        assert!(ics.ends_with("\r\n"));
        // Splitting on CRLF must leave no stray LF behind
        for line in ics.trim_end().split("\r\n") {
            assert!(!line.contains('\n'), "Bare LF inside line: {:?}", line);
        }
    }

    #[test]
    fn test_export_formats_utc_instants() {
        let ics = export_ics(&[visible_event("e1", "Standup")]);

        assert!(ics.contains("DTSTART:20250320T150000Z"));
        assert!(ics.contains("DTEND:20250320T160000Z"));
        assert!(ics.contains("UID:e1"));
        assert!(ics.contains("SUMMARY:Standup"));
    }

    #[test]
    fn test_export_omits_empty_optional_fields() {
        let mut with_extras = visible_event("e1", "Standup");
        with_extras.description = Some("Daily sync".to_string());
        with_extras.location = Some("Room 4".to_string());
        let mut without = visible_event("e2", "Lunch");
        without.description = Some(String::new());

        let ics = export_ics(&[with_extras, without]);

        assert_eq!(ics.matches("DESCRIPTION:").count(), 1);
        assert!(ics.contains("DESCRIPTION:Daily sync"));
        assert!(ics.contains("LOCATION:Room 4"));
        assert_eq!(ics.matches("LOCATION:").count(), 1);
    }

    #[test]
    fn test_export_without_events_is_just_the_envelope() {
        let ics = export_ics(&[]);

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
