use crate::commands::Config;
use crate::error::DashboardResult;
use crate::services::registry;
use crate::state::AppState;

pub fn select_engine(state: &AppState, index: usize) -> DashboardResult<Config> {
    state.update_config(|config| registry::select(config, index))
}

pub fn next_engine(state: &AppState) -> DashboardResult<Config> {
    state.update_config(|config| {
        registry::next(config);
        Ok(())
    })
}

pub fn previous_engine(state: &AppState) -> DashboardResult<Config> {
    state.update_config(|config| {
        registry::previous(config);
        Ok(())
    })
}

pub fn add_engine(state: &AppState, name: String, url: String) -> DashboardResult<Config> {
    state.update_config(|config| registry::add(config, &name, &url))
}

pub fn remove_engine(state: &AppState, index: usize) -> DashboardResult<Config> {
    state.update_config(|config| registry::remove(config, index))
}

/// The URL the current engine produces for `query`.
pub fn resolve_search(state: &AppState, query: &str) -> String {
    registry::resolve(&state.read_config(), query)
}
