//! Owned application state, managed by Tauri.
//!
//! Every command reaches the configuration and the image store through here;
//! nothing in the backend is process-global. Mutations go through
//! [`AppState::update_config`], which persists the configuration before the
//! new value is handed back to the page.

use std::sync::{Mutex, PoisonError};

use tracing::{error, info};

use crate::commands::Config;
use crate::error::{DashboardError, DashboardResult};
use crate::services::background_store::BackgroundStore;
use crate::services::settings_store::SettingsStore;

pub struct AppState {
    settings: SettingsStore,
    config: Mutex<Config>,
    backgrounds: Mutex<Option<BackgroundStore>>,
}

impl AppState {
    /// Loads persisted settings and opens the image store at their default
    /// platform locations. A failed image-store open is not fatal: the
    /// dashboard still runs and image operations report the storage as
    /// unavailable, matching the original widget's behavior when its
    /// database never opened.
    pub fn initialize() -> DashboardResult<Self> {
        let settings = SettingsStore::open_default()?;
        let backgrounds = match BackgroundStore::open_default() {
            Ok(store) => Some(store),
            Err(e) => {
                error!(error = %e, "Background store unavailable");
                None
            }
        };
        Ok(Self::new(settings, backgrounds))
    }

    pub fn new(settings: SettingsStore, backgrounds: Option<BackgroundStore>) -> Self {
        let config = settings.load_or_default();
        info!(
            engines = config.search_engines.len(),
            "Loaded dashboard settings"
        );
        Self {
            settings,
            config: Mutex::new(config),
            backgrounds: Mutex::new(backgrounds),
        }
    }

    /// A snapshot of the current configuration.
    pub fn read_config(&self) -> Config {
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies a mutation to the configuration and persists the result. The
    /// mutation runs on a locked copy-in-place, so a failing mutation leaves
    /// nothing half-written.
    pub fn update_config<F>(&self, mutate: F) -> DashboardResult<Config>
    where
        F: FnOnce(&mut Config) -> DashboardResult<()>,
    {
        let mut config = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = config.clone();
        mutate(&mut next)?;
        self.settings.save(&next)?;
        *config = next;
        Ok(config.clone())
    }

    /// Runs `op` against the image store, failing when the store never
    /// opened.
    pub fn with_backgrounds<F, T>(&self, op: F) -> DashboardResult<T>
    where
        F: FnOnce(&mut BackgroundStore) -> DashboardResult<T>,
    {
        let mut guard = self
            .backgrounds
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            Some(store) => op(store),
            None => Err(DashboardError::StorageUnavailable(
                "background store is not open".to_string(),
            )),
        }
    }
}
