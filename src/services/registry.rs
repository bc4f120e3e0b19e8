//! Search-engine registry operations.
//!
//! The registry is the `searchEngines` list plus `searchEngineIndex` inside
//! the configuration; these functions are the only way the command layer
//! mutates it, so the invariants (non-empty list, index in range) hold as
//! long as the configuration was sanitized on load.

use crate::commands::{Config, SearchEngine, QUERY_PLACEHOLDER};
use crate::error::{DashboardError, DashboardResult};

pub fn select(config: &mut Config, index: usize) -> DashboardResult<()> {
    if index >= config.search_engines.len() {
        return Err(DashboardError::validation(format!(
            "engine index {} out of range",
            index
        )));
    }
    config.search_engine_index = index;
    Ok(())
}

pub fn next(config: &mut Config) {
    let n = config.search_engines.len();
    config.search_engine_index = (config.search_engine_index + 1) % n;
}

pub fn previous(config: &mut Config) {
    let n = config.search_engines.len();
    config.search_engine_index = (config.search_engine_index + n - 1) % n;
}

pub fn add(config: &mut Config, name: &str, url: &str) -> DashboardResult<()> {
    let name = name.trim();
    let url = url.trim();
    if name.is_empty() {
        return Err(DashboardError::validation("engine name is empty"));
    }
    if url.is_empty() {
        return Err(DashboardError::validation("engine URL is empty"));
    }
    config
        .search_engines
        .push(SearchEngine::new(name, normalize_template(url)));
    Ok(())
}

/// Removes the engine at `index`. The current selection moves with the list:
/// removing an engine before it shifts it down by one, removing the selected
/// engine resets the selection to the first entry.
pub fn remove(config: &mut Config, index: usize) -> DashboardResult<()> {
    if index >= config.search_engines.len() {
        return Err(DashboardError::validation(format!(
            "engine index {} out of range",
            index
        )));
    }
    if config.search_engines.len() == 1 {
        return Err(DashboardError::InvariantViolation(
            "the last search engine cannot be deleted".to_string(),
        ));
    }

    config.search_engines.remove(index);
    if index < config.search_engine_index {
        config.search_engine_index -= 1;
    } else if index == config.search_engine_index {
        config.search_engine_index = 0;
    }
    Ok(())
}

/// A template with no placeholder that ends in `/` addresses documents by
/// path (wiki style); the query gets appended to it rather than repaired
/// into a query parameter.
pub fn is_document_path(url: &str) -> bool {
    !url.contains(QUERY_PLACEHOLDER) && url.ends_with('/')
}

/// Best-effort placeholder repair for user-entered templates: a template
/// without `(query)` that is not document-path style gets the query appended
/// as a trailing parameter.
pub fn normalize_template(url: &str) -> String {
    if url.contains(QUERY_PLACEHOLDER) || is_document_path(url) {
        return url.to_string();
    }
    if url.contains('?') {
        format!("{}&q={}", url, QUERY_PLACEHOLDER)
    } else {
        format!("{}?q={}", url, QUERY_PLACEHOLDER)
    }
}

/// Resolves `query` against the currently selected engine.
pub fn resolve(config: &Config, query: &str) -> String {
    resolve_with(&config.search_engines[config.search_engine_index], query)
}

pub fn resolve_with(engine: &SearchEngine, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    if is_document_path(&engine.url) {
        return format!("{}{}", engine.url, encoded);
    }
    normalize_template(&engine.url).replace(QUERY_PLACEHOLDER, &encoded)
}
