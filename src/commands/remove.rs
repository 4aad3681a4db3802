use anyhow::Result;

use crate::render::pluralize;

pub fn run(needle: &str) -> Result<()> {
    let (store, mut registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    let calendar = super::resolve_calendar(&registry, needle)?;
    let count = registry.event_count(&calendar.id);

    let removed = registry
        .delete_calendar(&calendar.id)
        .ok_or_else(|| anyhow::anyhow!("Calendar '{}' not found", needle))?;
    store.save(&registry)?;

    println!(
        "Removed 📅 {} and its {} {}",
        removed.name,
        count,
        pluralize("event", count)
    );

    Ok(())
}
