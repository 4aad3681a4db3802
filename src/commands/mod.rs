pub mod add;
pub mod events;
pub mod export;
pub mod list;
pub mod mode;
pub mod remove;
pub mod toggle;

use anyhow::Result;
use mergecal_core::Calendar;
use mergecal_core::config::Config;
use mergecal_core::registry::Registry;
use mergecal_core::store::StateStore;

/// Load the persisted registry together with the store that saves it.
///
/// A missing snapshot is a first run; it becomes an empty registry.
pub fn load_registry() -> Result<(StateStore, Registry)> {
    let config = Config::load()?;
    let store = StateStore::new(&config.state_dir()?);
    let registry = store.load()?.unwrap_or_default();
    Ok((store, registry))
}

/// Shared error message for an empty registry
pub fn require_calendars(registry: &Registry) -> Result<()> {
    if registry.calendars.is_empty() {
        anyhow::bail!(
            "No calendars found.\n\n\
            Subscribe to your first feed with:\n  \
            mergecal add <NAME> <URL>\n\n\
            Example:\n  \
            mergecal add Work https://example.com/team.ics"
        );
    }
    Ok(())
}

/// Find one calendar by exact id, exact name, or unique name prefix.
pub fn resolve_calendar(registry: &Registry, needle: &str) -> Result<Calendar> {
    if let Some(calendar) = registry.calendars.iter().find(|c| c.id == needle) {
        return Ok(calendar.clone());
    }

    if let Some(calendar) = registry.calendars.iter().find(|c| c.name == needle) {
        return Ok(calendar.clone());
    }

    let lowered = needle.to_lowercase();
    let mut matches = registry
        .calendars
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&lowered));

    match (matches.next(), matches.next()) {
        (Some(calendar), None) => Ok(calendar.clone()),
        (Some(_), Some(_)) => anyhow::bail!(
            "Calendar '{}' matches more than one name. Be more specific",
            needle
        ),
        _ => {
            let available: Vec<_> = registry
                .calendars
                .iter()
                .map(|c| c.name.clone())
                .collect();
            anyhow::bail!(
                "Calendar '{}' not found. Available: {}",
                needle,
                available.join(", ")
            )
        }
    }
}
