//! SQLite-backed blob store for uploaded background images.
//!
//! Images are keyed `image_<n>` by their position in the saved batch and are
//! only ever replaced wholesale: a save clears the previous batch first, the
//! same way the original widget rewrote its whole object store.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::commands::StoredImage;
use crate::error::DashboardResult;

pub struct BackgroundStore {
    conn: Connection,
}

impl BackgroundStore {
    /// Opens the store in the app's data directory
    /// (`<data_dir>/clocktab/backgrounds.db`).
    pub fn open_default() -> DashboardResult<Self> {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("clocktab");
        std::fs::create_dir_all(&data_dir)?;
        Self::open(data_dir.join("backgrounds.db"))
    }

    /// Opens a store over a custom database path (useful for tests)
    pub fn open<P: AsRef<Path>>(db_path: P) -> DashboardResult<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS background_images (
                id TEXT PRIMARY KEY,
                ordinal INTEGER NOT NULL,
                mime TEXT NOT NULL,
                data BLOB NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Replaces the entire collection in one transaction.
    pub fn save_all(&mut self, images: &[StoredImage]) -> DashboardResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM background_images", [])?;
        for (i, image) in images.iter().enumerate() {
            tx.execute(
                "INSERT INTO background_images (id, ordinal, mime, data) VALUES (?1, ?2, ?3, ?4)",
                params![format!("image_{}", i), i as i64, image.mime, image.data],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// All stored images in save order.
    pub fn load_all(&self) -> DashboardResult<Vec<StoredImage>> {
        let mut stmt = self
            .conn
            .prepare("SELECT mime, data FROM background_images ORDER BY ordinal")?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredImage {
                mime: row.get(0)?,
                data: row.get(1)?,
            })
        })?;

        let mut images = Vec::new();
        for row in rows {
            images.push(row?);
        }
        Ok(images)
    }

    pub fn clear(&mut self) -> DashboardResult<()> {
        self.conn.execute("DELETE FROM background_images", [])?;
        Ok(())
    }
}
