//! Projection of the raw event pool into the merged view.

use chrono::{DateTime, Utc};

use crate::calendar::{Calendar, DisplayMode};
use crate::event::Event;

/// An event as the rendering and export layers see it.
///
/// Titles are already rewritten per the owning calendar's display mode
/// and the calendar's color travels along, so consumers never reach
/// back into the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub all_day: bool,
    pub color: String,
    pub calendar_id: String,
}

/// Project `events` through their calendars' visibility and display
/// mode. Pure; input order is preserved.
///
/// Events whose calendar is hidden, or no longer exists, are dropped.
pub fn visible_events(calendars: &[Calendar], events: &[Event]) -> Vec<VisibleEvent> {
    events
        .iter()
        .filter_map(|event| {
            let calendar = calendars.iter().find(|c| c.id == event.calendar_id)?;
            if !calendar.visible {
                return None;
            }

            Some(VisibleEvent {
                id: event.id.clone(),
                title: effective_title(calendar, &event.title),
                start: event.start,
                end: event.end,
                description: event.description.clone(),
                location: event.location.clone(),
                all_day: event.all_day,
                color: calendar.color.clone(),
                calendar_id: calendar.id.clone(),
            })
        })
        .collect()
}

fn effective_title(calendar: &Calendar, original: &str) -> String {
    match calendar.display_mode {
        DisplayMode::Original => original.to_string(),
        DisplayMode::Busy => "Busy".to_string(),
        DisplayMode::Custom => match calendar.custom_text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => original.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calendar(name: &str) -> Calendar {
        Calendar::new(name, "https://example.com/feed.ics")
    }

    fn event(id: &str, title: &str, calendar_id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap(),
            calendar_id: calendar_id.to_string(),
            description: None,
            location: None,
            all_day: false,
        }
    }

    #[test]
    fn test_hidden_calendar_events_are_dropped() {
        let mut hidden = calendar("Hidden");
        hidden.visible = false;
        let shown = calendar("Shown");

        let events = vec![
            event("e1", "Secret", &hidden.id),
            event("e2", "Public", &shown.id),
        ];

        let visible = visible_events(&[hidden, shown], &events);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "e2");
    }

    #[test]
    fn test_orphaned_events_are_dropped() {
        let shown = calendar("Shown");
        let events = vec![
            event("e1", "Orphan", "gone"),
            event("e2", "Kept", &shown.id),
        ];

        let visible = visible_events(&[shown], &events);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "e2");
    }

    #[test]
    fn test_busy_mode_masks_titles() {
        let mut cal = calendar("Work");
        cal.display_mode = DisplayMode::Busy;
        let events = vec![event("e1", "Salary negotiation", &cal.id)];

        let visible = visible_events(&[cal], &events);

        assert_eq!(visible[0].title, "Busy");
    }

    #[test]
    fn test_custom_mode_uses_custom_text() {
        let mut cal = calendar("Work");
        cal.display_mode = DisplayMode::Custom;
        cal.custom_text = Some("Blocked".to_string());
        let events = vec![event("e1", "Dentist", &cal.id)];

        let visible = visible_events(&[cal], &events);

        assert_eq!(visible[0].title, "Blocked");
    }

    #[test]
    fn test_custom_mode_without_text_keeps_original_title() {
        let mut with_empty = calendar("A");
        with_empty.display_mode = DisplayMode::Custom;
        with_empty.custom_text = Some(String::new());

        let mut with_none = calendar("B");
        with_none.display_mode = DisplayMode::Custom;

        let events = vec![
            event("e1", "Dentist", &with_empty.id),
            event("e2", "Gym", &with_none.id),
        ];

        let visible = visible_events(&[with_empty, with_none], &events);

        assert_eq!(visible[0].title, "Dentist");
        assert_eq!(visible[1].title, "Gym");
    }

    #[test]
    fn test_projection_carries_calendar_color() {
        let cal = calendar("Work");
        let color = cal.color.clone();
        let events = vec![event("e1", "Meeting", &cal.id)];

        let visible = visible_events(&[cal], &events);

        assert_eq!(visible[0].color, color);
    }
}
