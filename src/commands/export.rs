use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use mergecal_core::ics::export_ics;
use mergecal_core::project::visible_events;

use crate::render::pluralize;

const DEFAULT_EXPORT_FILE: &str = "merged-calendar.ics";

pub fn run(output: Option<&Path>) -> Result<()> {
    let (_, registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    let events = visible_events(&registry.calendars, &registry.events);
    let ics = export_ics(&events);

    let path = output.unwrap_or(Path::new(DEFAULT_EXPORT_FILE));
    std::fs::write(path, &ics)?;

    println!(
        "Exported {} {} to {}",
        events.len(),
        pluralize("event", events.len()),
        path.display().to_string().bold()
    );

    Ok(())
}
