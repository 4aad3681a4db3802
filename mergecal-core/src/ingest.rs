//! Feed ingestion: fetch, parse, normalize.

use crate::calendar::Calendar;
use crate::error::{MergecalError, MergecalResult};
use crate::event::Event;
use crate::fetch::FeedFetcher;
use crate::ics::parse_feed;
use crate::normalize::normalize;

/// Fetch `calendar`'s feed and normalize it into an event batch.
///
/// Nothing is committed here. The caller only registers the calendar
/// once this returns Ok, which keeps calendar-plus-events creation
/// all-or-nothing.
pub async fn ingest_feed(fetcher: &FeedFetcher, calendar: &Calendar) -> MergecalResult<Vec<Event>> {
    let raw = fetcher.fetch(&calendar.url).await?;
    let components = parse_feed(&raw)?;
    let total = components.len();

    let events = normalize(components, &calendar.id);
    if events.is_empty() {
        return Err(MergecalError::NoValidEvents);
    }

    log::debug!(
        "Ingested {}/{} events from {}",
        events.len(),
        total,
        calendar.url
    );

    Ok(events)
}
