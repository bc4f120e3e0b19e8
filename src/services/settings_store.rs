//! JSON-file persistence for the dashboard configuration.
//!
//! The configuration lives as a single pretty-printed JSON document under the
//! platform config directory and is rewritten after every mutation.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::commands::Config;
use crate::error::{DashboardError, DashboardResult};

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Opens the store at the default platform location
    /// (`<config_dir>/clocktab/config.json`).
    pub fn open_default() -> DashboardResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                DashboardError::StorageUnavailable("unable to get config directory".to_string())
            })?
            .join("clocktab");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::with_path(config_dir.join("config.json")))
    }

    /// Creates a store over a custom file path (useful for tests)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns `None` on first run. An unreadable or unparsable file is
    /// logged and treated as no saved configuration.
    pub fn load(&self) -> Option<Config> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Config>(&json) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unparsable settings file");
                None
            }
        }
    }

    /// Persisted settings merged over defaults, with the search-engine
    /// invariants re-established.
    pub fn load_or_default(&self) -> Config {
        let mut config = self.load().unwrap_or_default();
        config.sanitize();
        config
    }

    pub fn save(&self, config: &Config) -> DashboardResult<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| DashboardError::decode(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
