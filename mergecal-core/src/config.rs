//! Global mergecal configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{MergecalError, MergecalResult};
use crate::fetch::DEFAULT_RELAY_URL;

fn default_relay_url() -> String {
    DEFAULT_RELAY_URL.to_string()
}

/// Global configuration at ~/.config/mergecal/config.toml
///
/// Subscribed calendars are not configured here; they live in the state
/// snapshot under the data directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where the state snapshot lives. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Relay prepended to feed URLs when direct fetching fails.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            data_dir: None,
            relay_url: default_relay_url(),
        }
    }
}

impl Config {
    pub fn config_path() -> MergecalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MergecalError::Config("Could not determine config directory".into()))?
            .join("mergecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file. A missing file is not an error; it just
    /// means defaults.
    pub fn load() -> MergecalResult<Config> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| {
            MergecalError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Directory the state snapshot is stored in.
    pub fn state_dir(&self) -> MergecalResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| MergecalError::Config("Could not determine data directory".into()))?;

        Ok(data_dir.join("mergecal"))
    }
}
