#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

pub mod commands;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;

pub use commands::{ClockStrings, Config, SearchEngine, StoredImage};
pub use error::{DashboardError, DashboardResult};
pub use state::AppState;
