use crate::commands::Config;
use crate::error::DashboardResult;
use crate::state::AppState;

pub fn get_config(state: &AppState) -> Config {
    state.read_config()
}

pub fn set_autohide(
    state: &AppState,
    enabled: bool,
    hide_delay: Option<u64>,
) -> DashboardResult<Config> {
    state.update_config(|config| {
        config.autohide = enabled;
        if let Some(delay) = hide_delay {
            config.hide_delay = delay;
        }
        Ok(())
    })
}

pub fn set_blur(state: &AppState, enabled: bool) -> DashboardResult<Config> {
    state.update_config(|config| {
        config.blur = enabled;
        Ok(())
    })
}

pub fn set_tip(state: &AppState, enabled: bool) -> DashboardResult<Config> {
    state.update_config(|config| {
        config.tip = enabled;
        Ok(())
    })
}

pub fn set_background_color(state: &AppState, color: String) -> DashboardResult<Config> {
    state.update_config(|config| {
        config.background_color = color;
        Ok(())
    })
}
