use anyhow::Result;
use mergecal_core::DisplayMode;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(needle: &str, mode: DisplayMode, text: Option<&str>) -> Result<()> {
    let (store, mut registry) = super::load_registry()?;
    super::require_calendars(&registry)?;

    let calendar = super::resolve_calendar(&registry, needle)?;

    registry.set_display_mode(&calendar.id, mode);
    if let Some(text) = text {
        registry.set_custom_text(&calendar.id, text);
    }
    store.save(&registry)?;

    if let Some(updated) = registry.calendar(&calendar.id) {
        println!("{}", updated.render());

        let has_text = updated
            .custom_text
            .as_deref()
            .is_some_and(|t| !t.is_empty());
        if mode == DisplayMode::Custom && !has_text {
            println!(
                "   {}",
                "Titles stay unchanged until you set one with --text".dimmed()
            );
        }
    }

    Ok(())
}
