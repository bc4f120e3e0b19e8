pub mod background;
pub mod engines;
pub mod settings;
pub mod transfer;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Placeholder that marks where the query goes in an engine URL template
pub const QUERY_PLACEHOLDER: &str = "(query)";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_autohide")]
    pub autohide: bool,
    /// Idle delay before the clock box fades out, in milliseconds
    #[serde(default = "default_hide_delay")]
    pub hide_delay: u64,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_blur")]
    pub blur: bool,
    #[serde(default = "default_tip")]
    pub tip: bool,
    #[serde(default)]
    pub search_engine_index: usize,
    #[serde(default = "default_search_engines")]
    pub search_engines: Vec<SearchEngine>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchEngine {
    pub name: String,
    pub url: String,
}

impl SearchEngine {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One background image as kept in the blob store
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredImage {
    pub data: Vec<u8>,
    pub mime: String,
}

/// Display strings for one clock tick
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ClockStrings {
    pub hm: String,
    pub s: String,
    pub date: String,
}

fn default_autohide() -> bool {
    true
}

fn default_hide_delay() -> u64 {
    2000
}

fn default_background_color() -> String {
    "rgba(0, 0, 0)".to_string()
}

fn default_blur() -> bool {
    true
}

fn default_tip() -> bool {
    true
}

static DEFAULT_ENGINES: Lazy<Vec<SearchEngine>> = Lazy::new(|| {
    vec![
        SearchEngine::new("구글", "https://www.google.com/search?q=(query)"),
        SearchEngine::new("네이버", "https://search.naver.com/search.naver?query=(query)"),
        SearchEngine::new("유튜브", "https://www.youtube.com/results?search_query=(query)"),
        SearchEngine::new("나무위키", "https://namu.wiki/w/"),
    ]
});

pub fn default_search_engines() -> Vec<SearchEngine> {
    DEFAULT_ENGINES.clone()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autohide: default_autohide(),
            hide_delay: default_hide_delay(),
            background_color: default_background_color(),
            blur: default_blur(),
            tip: default_tip(),
            search_engine_index: 0,
            search_engines: default_search_engines(),
        }
    }
}

impl Config {
    /// Re-establishes the registry invariants after loading persisted or
    /// imported data: the engine list is never empty and the selection index
    /// always points inside it.
    pub fn sanitize(&mut self) {
        if self.search_engines.is_empty() {
            self.search_engines = default_search_engines();
            self.search_engine_index = 0;
        }
        if self.search_engine_index >= self.search_engines.len() {
            self.search_engine_index = 0;
        }
    }
}
