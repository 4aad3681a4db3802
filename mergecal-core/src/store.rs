//! Snapshot persistence for the registry.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::error::{MergecalError, MergecalResult};
use crate::event::Event;
use crate::registry::{Registry, ViewMode};

/// Current snapshot schema version. Bump on shape changes.
const SNAPSHOT_VERSION: u32 = 1;

const STATE_FILE: &str = "state.json";

/// The on-disk shape of the registry, versioned for migrations.
///
/// Field names are fixed wire format; renaming a struct field must not
/// change them.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    version: u32,
    calendars: Vec<Calendar>,
    events: Vec<Event>,
    #[serde(default)]
    current_view: ViewMode,
    #[serde(default)]
    dark_mode: bool,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(dir: &Path) -> StateStore {
        StateStore {
            path: dir.join(STATE_FILE),
        }
    }

    /// Load the saved registry. `None` means no snapshot exists yet,
    /// which is a normal first run, not an error.
    pub fn load(&self) -> MergecalResult<Option<Registry>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| MergecalError::Store(format!("Corrupt state file: {}", e)))?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(MergecalError::Store(format!(
                "State file version {} is newer than this build supports ({})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        Ok(Some(Registry {
            calendars: snapshot.calendars,
            events: snapshot.events,
            current_view: snapshot.current_view,
            dark_mode: snapshot.dark_mode,
        }))
    }

    /// Persist the registry, replacing any previous snapshot.
    pub fn save(&self, registry: &Registry) -> MergecalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            calendars: registry.calendars.clone(),
            events: registry.events.clone(),
            current_view: registry.current_view,
            dark_mode: registry.dark_mode,
        };

        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| MergecalError::Store(e.to_string()))?;

        // Write-then-rename so a crash never leaves a half-written file
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
