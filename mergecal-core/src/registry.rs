//! The registry: subscribed calendars plus their merged event pool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, DisplayMode};
use crate::event::Event;

/// Which window of the merged view gets rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
    Agenda,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "agenda" => Ok(ViewMode::Agenda),
            other => Err(format!(
                "Unknown view '{}'. Expected day, week, month or agenda",
                other
            )),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
            ViewMode::Agenda => write!(f, "agenda"),
        }
    }
}

/// Everything the application remembers between runs.
///
/// Calendars keep insertion order; that is also their display order.
/// Event order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub calendars: Vec<Calendar>,
    pub events: Vec<Event>,
    pub current_view: ViewMode,
    pub dark_mode: bool,
}

impl Registry {
    /// Commit a calendar together with its ingested events.
    ///
    /// Ingestion happens before this is called; a calendar never appears
    /// here without its event batch.
    pub fn add_calendar(&mut self, calendar: Calendar, events: Vec<Event>) {
        self.calendars.push(calendar);
        self.events.extend(events);
    }

    /// Remove a calendar and every event it owns.
    pub fn delete_calendar(&mut self, id: &str) -> Option<Calendar> {
        let index = self.calendars.iter().position(|c| c.id == id)?;
        let removed = self.calendars.remove(index);
        self.events.retain(|e| e.calendar_id != id);
        Some(removed)
    }

    /// Flip a calendar in or out of the merged view. Returns the new
    /// visibility, or None for an unknown id.
    pub fn toggle_visibility(&mut self, id: &str) -> Option<bool> {
        let calendar = self.calendar_mut(id)?;
        calendar.visible = !calendar.visible;
        Some(calendar.visible)
    }

    pub fn set_display_mode(&mut self, id: &str, mode: DisplayMode) -> Option<()> {
        self.calendar_mut(id)?.display_mode = mode;
        Some(())
    }

    pub fn set_custom_text(&mut self, id: &str, text: &str) -> Option<()> {
        self.calendar_mut(id)?.custom_text = Some(text.to_string());
        Some(())
    }

    pub fn calendar(&self, id: &str) -> Option<&Calendar> {
        self.calendars.iter().find(|c| c.id == id)
    }

    fn calendar_mut(&mut self, id: &str) -> Option<&mut Calendar> {
        self.calendars.iter_mut().find(|c| c.id == id)
    }

    /// How many calendars are currently part of the merged view.
    pub fn visible_count(&self) -> usize {
        self.calendars.iter().filter(|c| c.visible).count()
    }

    /// How many events a calendar contributed at ingest time.
    pub fn event_count(&self, id: &str) -> usize {
        self.events.iter().filter(|e| e.calendar_id == id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, calendar_id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "Test".to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap(),
            calendar_id: calendar_id.to_string(),
            description: None,
            location: None,
            all_day: false,
        }
    }

    fn registry_with_two_calendars() -> (Registry, String, String) {
        let mut registry = Registry::default();
        let work = Calendar::new("Work", "https://example.com/work.ics");
        let home = Calendar::new("Home", "https://example.com/home.ics");
        let (work_id, home_id) = (work.id.clone(), home.id.clone());

        registry.add_calendar(
            work,
            vec![event("w1", &work_id), event("w2", &work_id)],
        );
        registry.add_calendar(home, vec![event("h1", &home_id)]);

        (registry, work_id, home_id)
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let (registry, work_id, home_id) = registry_with_two_calendars();

        assert_eq!(registry.calendars[0].id, work_id);
        assert_eq!(registry.calendars[1].id, home_id);
        assert_eq!(registry.events.len(), 3);
    }

    #[test]
    fn test_delete_cascades_to_events() {
        let (mut registry, work_id, home_id) = registry_with_two_calendars();

        let removed = registry.delete_calendar(&work_id);

        assert_eq!(removed.map(|c| c.name), Some("Work".to_string()));
        assert_eq!(registry.calendars.len(), 1);
        assert_eq!(registry.events.len(), 1);
        assert!(registry.events.iter().all(|e| e.calendar_id == home_id));
    }

    #[test]
    fn test_delete_unknown_calendar_is_noop() {
        let (mut registry, _, _) = registry_with_two_calendars();

        assert!(registry.delete_calendar("nope").is_none());
        assert_eq!(registry.calendars.len(), 2);
        assert_eq!(registry.events.len(), 3);
    }

    #[test]
    fn test_toggle_visibility_flips_and_reports() {
        let (mut registry, work_id, _) = registry_with_two_calendars();

        assert_eq!(registry.toggle_visibility(&work_id), Some(false));
        assert_eq!(registry.visible_count(), 1);
        assert_eq!(registry.toggle_visibility(&work_id), Some(true));
        assert_eq!(registry.toggle_visibility("nope"), None);
    }

    #[test]
    fn test_display_mode_and_text_updates() {
        let (mut registry, work_id, _) = registry_with_two_calendars();

        registry.set_display_mode(&work_id, DisplayMode::Custom);
        registry.set_custom_text(&work_id, "Blocked");

        let calendar = registry.calendar(&work_id).unwrap();
        assert_eq!(calendar.display_mode, DisplayMode::Custom);
        assert_eq!(calendar.custom_text.as_deref(), Some("Blocked"));
    }

    #[test]
    fn test_event_count_per_calendar() {
        let (registry, work_id, home_id) = registry_with_two_calendars();

        assert_eq!(registry.event_count(&work_id), 2);
        assert_eq!(registry.event_count(&home_id), 1);
        assert_eq!(registry.event_count("nope"), 0);
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("week".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert_eq!("AGENDA".parse::<ViewMode>(), Ok(ViewMode::Agenda));
        assert!("fortnight".parse::<ViewMode>().is_err());
    }
}
