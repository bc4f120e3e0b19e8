use std::path::Path;

/// Extension used when writing an image of this MIME type into the export
/// archive. Unknown types fall back to `png`.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime.to_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        "image/avif" => "avif",
        "image/svg+xml" => "svg",
        _ => "png",
    }
}

/// MIME type recovered from an archive file extension. Unknown extensions
/// fall back to `image/png`.
pub fn mime_for_extension(ext: &str) -> String {
    let mime = match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        _ => "image/png",
    };
    mime.to_string()
}

pub fn file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
