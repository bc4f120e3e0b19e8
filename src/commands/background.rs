use rand::Rng;
use tracing::warn;

use crate::commands::StoredImage;
use crate::error::{DashboardError, DashboardResult};
use crate::state::AppState;

/// Wholesale replace of the stored background batch.
pub fn save_backgrounds(state: &AppState, images: Vec<StoredImage>) -> DashboardResult<()> {
    if images.is_empty() {
        return Err(DashboardError::validation("no images were selected"));
    }
    state.with_backgrounds(|store| store.save_all(&images))
}

pub fn clear_backgrounds(state: &AppState) -> DashboardResult<()> {
    state.with_backgrounds(|store| store.clear())
}

/// One background picked uniformly at random, or `None` when no images are
/// stored. A storage failure degrades to `None` with a log line so the page
/// falls back to the flat background color instead of showing an error.
pub fn get_background<R: Rng>(state: &AppState, rng: &mut R) -> Option<StoredImage> {
    let images = match state.with_backgrounds(|store| store.load_all()) {
        Ok(images) => images,
        Err(e) => {
            warn!(error = %e, "Background load failed, falling back to flat color");
            return None;
        }
    };
    pick_image(images, rng)
}

pub fn pick_image<R: Rng>(mut images: Vec<StoredImage>, rng: &mut R) -> Option<StoredImage> {
    if images.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..images.len());
    Some(images.swap_remove(index))
}
