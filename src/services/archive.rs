//! Settings export/import as a ZIP archive.
//!
//! The archive holds a `settings.json` manifest (every configuration field
//! plus a `hasBackgroundImages` flag) and the stored images as numbered files
//! under `backgrounds/`. Image file extensions are derived from the stored
//! MIME type on export and mapped back on import.

use std::io::{Cursor, Read, Write};

use serde_json::Value;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::commands::{Config, StoredImage};
use crate::error::{DashboardError, DashboardResult};
use crate::utils;

pub const MANIFEST_NAME: &str = "settings.json";
pub const IMAGE_DIR: &str = "backgrounds";

const HAS_IMAGES_FLAG: &str = "hasBackgroundImages";

/// Contents of an uploaded archive, decoded but not yet applied.
pub struct ImportedSettings {
    pub manifest: Value,
    pub images: Vec<StoredImage>,
    pub has_background_images: bool,
}

/// Builds the `clock_settings.zip` payload.
pub fn export(config: &Config, images: &[StoredImage]) -> DashboardResult<Vec<u8>> {
    let mut manifest =
        serde_json::to_value(config).map_err(|e| DashboardError::decode(e.to_string()))?;
    if let Value::Object(fields) = &mut manifest {
        fields.insert(HAS_IMAGES_FLAG.to_string(), Value::Bool(!images.is_empty()));
    }
    let manifest_json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| DashboardError::decode(e.to_string()))?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file(MANIFEST_NAME, options)?;
    zip.write_all(manifest_json.as_bytes())?;

    for (i, image) in images.iter().enumerate() {
        let ext = utils::extension_for_mime(&image.mime);
        zip.start_file(format!("{}/image_{}.{}", IMAGE_DIR, i, ext), options)?;
        zip.write_all(&image.data)?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Parses an uploaded archive. Fails when the manifest file is absent or its
/// JSON does not parse; image entries are returned in ordinal order with the
/// MIME type inferred from each file extension.
pub fn import(bytes: &[u8]) -> DashboardResult<ImportedSettings> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let manifest: Value = {
        let mut file = match archive.by_name(MANIFEST_NAME) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(DashboardError::MalformedArchive(format!(
                    "archive has no {}",
                    MANIFEST_NAME
                )))
            }
            Err(e) => return Err(e.into()),
        };
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        serde_json::from_str(&json)
            .map_err(|e| DashboardError::decode(format!("unparsable manifest: {}", e)))?
    };

    let has_background_images = manifest
        .get(HAS_IMAGES_FLAG)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let prefix = format!("{}/", IMAGE_DIR);
    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with(&prefix) && !name.ends_with('/'))
        .map(String::from)
        .collect();
    names.sort_by_key(|name| image_ordinal(name));

    let mut images = Vec::new();
    for name in &names {
        let mut file = archive.by_name(name)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        images.push(StoredImage {
            data,
            mime: utils::mime_for_extension(&utils::file_extension(name)),
        });
    }

    Ok(ImportedSettings {
        manifest,
        images,
        has_background_images,
    })
}

/// Overlays manifest fields onto `current`; fields absent from the manifest
/// keep their current value. The result is re-sanitized like a startup load.
pub fn merge_manifest(current: &Config, manifest: &Value) -> DashboardResult<Config> {
    let Value::Object(fields) = manifest else {
        return Err(DashboardError::decode("manifest is not a JSON object"));
    };

    let mut value =
        serde_json::to_value(current).map_err(|e| DashboardError::decode(e.to_string()))?;
    if let Value::Object(target) = &mut value {
        for (key, field) in fields {
            if key == HAS_IMAGES_FLAG {
                continue;
            }
            target.insert(key.clone(), field.clone());
        }
    }

    let mut merged: Config = serde_json::from_value(value)
        .map_err(|e| DashboardError::decode(format!("manifest does not fit settings: {}", e)))?;
    merged.sanitize();
    Ok(merged)
}

/// `backgrounds/image_12.png` → 12; unnumbered files sort last.
fn image_ordinal(name: &str) -> usize {
    name.rsplit('/')
        .next()
        .and_then(|file| file.strip_prefix("image_"))
        .and_then(|rest| rest.split('.').next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(usize::MAX)
}
