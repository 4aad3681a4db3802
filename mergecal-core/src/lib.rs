//! Core library for mergecal.
//!
//! Everything between a feed URL and the combined ICS output lives here:
//! - `fetch` retrieves remote feeds, falling back to a relay
//! - `ics` parses feeds into typed components and generates the merged feed
//! - `normalize` turns parsed components into canonical events
//! - `registry` holds the subscribed calendars and their event pool
//! - `project` computes the merged view the renderer and exporter consume
//! - `store` persists the registry between runs
//!
//! The CLI in the root crate is a thin shell over these modules.

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod fetch;
pub mod ics;
pub mod ingest;
pub mod normalize;
pub mod project;
pub mod registry;
pub mod store;

// Re-export the main types at crate root for convenience
pub use calendar::{Calendar, DisplayMode};
pub use error::{MergecalError, MergecalResult};
pub use event::Event;
pub use project::VisibleEvent;
pub use registry::{Registry, ViewMode};
