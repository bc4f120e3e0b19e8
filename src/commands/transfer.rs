use tracing::info;

use crate::commands::Config;
use crate::error::DashboardResult;
use crate::services::archive;
use crate::state::AppState;

/// Builds the `clock_settings.zip` payload from the current configuration
/// and every stored image. The page turns the bytes into a download.
pub fn export_settings(state: &AppState) -> DashboardResult<Vec<u8>> {
    let config = state.read_config();
    let images = state.with_backgrounds(|store| store.load_all())?;
    info!(images = images.len(), "Exporting settings archive");
    archive::export(&config, &images)
}

/// Applies an uploaded archive: manifest fields merge over the current
/// configuration, archive images replace the stored batch, and an archive
/// that declares no images clears the store. Parsing and merging happen
/// before anything is written, so a malformed upload changes nothing.
pub fn import_settings(state: &AppState, data: Vec<u8>) -> DashboardResult<Config> {
    let imported = archive::import(&data)?;
    let merged = archive::merge_manifest(&state.read_config(), &imported.manifest)?;

    if !imported.images.is_empty() {
        state.with_backgrounds(|store| store.save_all(&imported.images))?;
    } else if !imported.has_background_images {
        state.with_backgrounds(|store| store.clear())?;
    }

    info!(images = imported.images.len(), "Imported settings archive");
    state.update_config(|config| {
        *config = merged;
        Ok(())
    })
}
