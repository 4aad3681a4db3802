use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use mergecal_core::Calendar;
use mergecal_core::config::Config;
use mergecal_core::fetch::FeedFetcher;
use mergecal_core::ingest::ingest_feed;
use mergecal_core::store::StateStore;
use owo_colors::OwoColorize;
use url::Url;

use crate::render::{Render, pluralize};

pub async fn run(name: &str, url: &str) -> Result<()> {
    Url::parse(url).map_err(|e| anyhow::anyhow!("'{}' is not a valid URL: {}", url, e))?;

    let config = Config::load()?;
    let store = StateStore::new(&config.state_dir()?);
    let mut registry = store.load()?.unwrap_or_default();

    let calendar = Calendar::new(name, url);
    let fetcher = FeedFetcher::new(config.relay_url.clone());

    let spinner = fetch_spinner(url);
    let result = ingest_feed(&fetcher, &calendar).await;
    spinner.finish_and_clear();

    // Nothing is saved unless the feed came back usable
    let events = result?;
    let count = events.len();

    println!("{}", calendar.render());
    registry.add_calendar(calendar, events);
    store.save(&registry)?;

    println!(
        "   Subscribed with {} {}",
        count.to_string().green(),
        pluralize("event", count)
    );

    Ok(())
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(format!("Fetching {}", url));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
