use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run() -> Result<()> {
    let (_, registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    for (i, calendar) in registry.calendars.iter().enumerate() {
        let count = registry.event_count(&calendar.id);

        println!("{}", calendar.render());
        println!(
            "   {} {}  {}",
            count,
            pluralize("event", count),
            calendar.url.dimmed()
        );

        // Add spacing between calendars (but not after the last one)
        if i < registry.calendars.len() - 1 {
            println!();
        }
    }

    let total_events = registry.events.len();
    println!(
        "\n{} of {} {} in the merged view ({} {} total)",
        registry.visible_count(),
        registry.calendars.len(),
        pluralize("calendar", registry.calendars.len()),
        total_events,
        pluralize("event", total_events)
    );

    Ok(())
}
