#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clocktab::commands::{background, engines, settings, transfer};
use clocktab::commands::{ClockStrings, Config, StoredImage};
use clocktab::services::{clock, tips};
use clocktab::state::AppState;
use tauri_plugin_shell::ShellExt;

#[tauri::command]
fn get_config(state: tauri::State<AppState>) -> Config {
    settings::get_config(&state)
}

#[tauri::command]
async fn set_autohide(
    state: tauri::State<'_, AppState>,
    enabled: bool,
    hide_delay: Option<u64>,
) -> Result<Config, String> {
    settings::set_autohide(&state, enabled, hide_delay).map_err(|e| e.to_string())
}

#[tauri::command]
async fn set_blur(state: tauri::State<'_, AppState>, enabled: bool) -> Result<Config, String> {
    settings::set_blur(&state, enabled).map_err(|e| e.to_string())
}

#[tauri::command]
async fn set_tip(state: tauri::State<'_, AppState>, enabled: bool) -> Result<Config, String> {
    settings::set_tip(&state, enabled).map_err(|e| e.to_string())
}

#[tauri::command]
async fn set_background_color(
    state: tauri::State<'_, AppState>,
    color: String,
) -> Result<Config, String> {
    settings::set_background_color(&state, color).map_err(|e| e.to_string())
}

#[tauri::command]
async fn select_engine(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<Config, String> {
    engines::select_engine(&state, index).map_err(|e| e.to_string())
}

#[tauri::command]
async fn next_engine(state: tauri::State<'_, AppState>) -> Result<Config, String> {
    engines::next_engine(&state).map_err(|e| e.to_string())
}

#[tauri::command]
async fn previous_engine(state: tauri::State<'_, AppState>) -> Result<Config, String> {
    engines::previous_engine(&state).map_err(|e| e.to_string())
}

#[tauri::command]
async fn add_engine(
    state: tauri::State<'_, AppState>,
    name: String,
    url: String,
) -> Result<Config, String> {
    engines::add_engine(&state, name, url).map_err(|e| e.to_string())
}

#[tauri::command]
async fn remove_engine(
    state: tauri::State<'_, AppState>,
    index: usize,
) -> Result<Config, String> {
    engines::remove_engine(&state, index).map_err(|e| e.to_string())
}

#[tauri::command]
fn resolve_search(state: tauri::State<AppState>, query: String) -> String {
    engines::resolve_search(&state, &query)
}

/// Resolves the query against the current engine and opens the result in the
/// system browser.
#[tauri::command]
async fn run_search(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    query: String,
) -> Result<String, String> {
    let url = engines::resolve_search(&state, &query);
    app.shell()
        .open(url.as_str(), None)
        .map_err(|e| e.to_string())?;
    Ok(url)
}

#[tauri::command]
async fn save_backgrounds(
    state: tauri::State<'_, AppState>,
    images: Vec<StoredImage>,
) -> Result<(), String> {
    background::save_backgrounds(&state, images).map_err(|e| e.to_string())
}

#[tauri::command]
async fn clear_backgrounds(state: tauri::State<'_, AppState>) -> Result<(), String> {
    background::clear_backgrounds(&state).map_err(|e| e.to_string())
}

#[tauri::command]
fn get_background(state: tauri::State<AppState>) -> Option<StoredImage> {
    background::get_background(&state, &mut rand::thread_rng())
}

#[tauri::command]
fn get_tip() -> String {
    tips::pick(&mut rand::thread_rng()).to_string()
}

#[tauri::command]
fn clock_now() -> ClockStrings {
    clock::format_clock(&chrono::Local::now())
}

#[tauri::command]
async fn export_settings(state: tauri::State<'_, AppState>) -> Result<Vec<u8>, String> {
    transfer::export_settings(&state).map_err(|e| e.to_string())
}

#[tauri::command]
async fn import_settings(
    state: tauri::State<'_, AppState>,
    data: Vec<u8>,
) -> Result<Config, String> {
    transfer::import_settings(&state, data).map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt::init();

    let state = AppState::initialize().expect("Failed to initialize dashboard state");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            get_config,
            set_autohide,
            set_blur,
            set_tip,
            set_background_color,
            select_engine,
            next_engine,
            previous_engine,
            add_engine,
            remove_engine,
            resolve_search,
            run_search,
            save_backgrounds,
            clear_backgrounds,
            get_background,
            get_tip,
            clock_now,
            export_settings,
            import_settings
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
