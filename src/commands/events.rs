use std::collections::HashMap;

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use mergecal_core::ViewMode;
use mergecal_core::project::{VisibleEvent, visible_events};
use owo_colors::OwoColorize;

pub fn run(view: Option<ViewMode>) -> Result<()> {
    let (store, mut registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    // A requested view becomes the remembered one
    if let Some(view) = view {
        if view != registry.current_view {
            registry.current_view = view;
            store.save(&registry)?;
        }
    }
    let view = registry.current_view;

    let names: HashMap<&str, &str> = registry
        .calendars
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let today = Local::now().date_naive();
    let mut events = visible_events(&registry.calendars, &registry.events);
    events.retain(|event| in_window(event, view, today));
    events.sort_by_key(|event| event.start);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(event, today);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let tag = format!("[{}]", names.get(event.calendar_id.as_str()).unwrap_or(&"?"));
        println!("  {} {} {}", format_time(event), event.title, tag.dimmed());
    }

    Ok(())
}

/// How many days the view covers, counting from today. None means no
/// upper bound; the agenda shows everything upcoming.
fn window_days(view: ViewMode) -> Option<i64> {
    match view {
        ViewMode::Day => Some(1),
        ViewMode::Week => Some(7),
        ViewMode::Month => Some(31),
        ViewMode::Agenda => None,
    }
}

fn in_window(event: &VisibleEvent, view: ViewMode, today: NaiveDate) -> bool {
    let (first, last) = span_dates(event);
    if last < today {
        return false;
    }

    match window_days(view) {
        Some(days) => first < today + Duration::days(days),
        None => true,
    }
}

/// The first and last calendar date an event touches.
///
/// All-day events stay on their stored dates; timed events are shifted
/// into local time first.
fn span_dates(event: &VisibleEvent) -> (NaiveDate, NaiveDate) {
    // Ends are exclusive, so step back a second before taking the date
    let end = if event.end > event.start {
        event.end - Duration::seconds(1)
    } else {
        event.end
    };

    if event.all_day {
        (event.start.date_naive(), end.date_naive())
    } else {
        (
            event.start.with_timezone(&Local).date_naive(),
            end.with_timezone(&Local).date_naive(),
        )
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(event: &VisibleEvent, today: NaiveDate) -> String {
    let date = span_dates(event).0;

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of an event (e.g. "15:00" or "all-day")
fn format_time(event: &VisibleEvent) -> String {
    if event.all_day {
        "all-day".to_string()
    } else {
        format!("{:>7}", event.start.with_timezone(&Local).format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event_at(
        start: chrono::DateTime<Utc>,
        end: chrono::DateTime<Utc>,
        all_day: bool,
    ) -> VisibleEvent {
        VisibleEvent {
            id: "e1".to_string(),
            title: "Test".to_string(),
            start,
            end,
            description: None,
            location: None,
            all_day,
            color: "hsl(10, 70%, 50%)".to_string(),
            calendar_id: "cal-1".to_string(),
        }
    }

    #[test]
    fn test_agenda_view_shows_everything_upcoming() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

        let long_finished = event_at(
            Utc.with_ymd_and_hms(1999, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1999, 1, 1, 11, 0, 0).unwrap(),
            false,
        );
        let far_future = event_at(
            Utc.with_ymd_and_hms(2030, 6, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 6, 1, 11, 0, 0).unwrap(),
            false,
        );

        // Upcoming only, but with no horizon
        assert!(!in_window(&long_finished, ViewMode::Agenda, today));
        assert!(in_window(&far_future, ViewMode::Agenda, today));
        assert!(!in_window(&far_future, ViewMode::Month, today));
    }

    #[test]
    fn test_week_window_keeps_overlapping_events() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

        // Started yesterday, ends in two days: overlaps the window
        let spanning = event_at(
            Utc.with_ymd_and_hms(2025, 3, 19, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 22, 10, 0, 0).unwrap(),
            false,
        );
        // Fully over before today
        let past = event_at(
            Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap(),
            false,
        );
        // Beyond the seven days
        let future = event_at(
            Utc.with_ymd_and_hms(2025, 4, 10, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 4, 10, 11, 0, 0).unwrap(),
            false,
        );

        assert!(in_window(&spanning, ViewMode::Week, today));
        assert!(!in_window(&past, ViewMode::Week, today));
        assert!(!in_window(&future, ViewMode::Week, today));
    }

    #[test]
    fn test_all_day_event_does_not_bleed_into_next_day() {
        // One-day event on March 19, exclusive end at March 20 midnight
        let event = event_at(
            Utc.with_ymd_and_hms(2025, 3, 19, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap(),
            true,
        );

        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert!(!in_window(&event, ViewMode::Day, today));

        let yesterday = NaiveDate::from_ymd_opt(2025, 3, 19).unwrap();
        assert!(in_window(&event, ViewMode::Day, yesterday));
    }
}
