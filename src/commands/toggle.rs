use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(needle: &str) -> Result<()> {
    let (store, mut registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    let calendar = super::resolve_calendar(&registry, needle)?;

    let visible = registry
        .toggle_visibility(&calendar.id)
        .ok_or_else(|| anyhow::anyhow!("Calendar '{}' not found", needle))?;
    store.save(&registry)?;

    if visible {
        println!("📅 {} is back in the merged view", calendar.name.green());
    } else {
        println!("📅 {} is hidden from the merged view", calendar.name.dimmed());
    }

    Ok(())
}
