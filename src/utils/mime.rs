//! MIME type detection for uploaded media.
//!
//! Uploads are classified by extension, the same way the admin upload
//! field does before any bytes are decoded.

use std::path::Path;

/// MIME type constants accepted or recognised by the media collection.
pub mod types {
    pub const JPEG: &str = "image/jpeg";
    pub const JPG: &str = "image/jpg";
    pub const PNG: &str = "image/png";
    pub const WEBP: &str = "image/webp";
    pub const GIF: &str = "image/gif";
    pub const SVG: &str = "image/svg+xml";

    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";
    pub const OGG_VIDEO: &str = "video/ogg";

    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    from_extension(ext.as_deref())
}

/// Guess MIME type from a lowercase extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("jpg" | "jpeg") => types::JPEG,
        Some("png") => types::PNG,
        Some("webp") => types::WEBP,
        Some("gif") => types::GIF,
        Some("svg") => types::SVG,

        Some("mp4" | "m4v") => types::MP4,
        Some("webm") => types::WEBM,
        Some("ogv" | "ogg") => types::OGG_VIDEO,

        _ => types::OCTET_STREAM,
    }
}

/// Raster images whose pixel dimensions can be probed and resized.
pub fn is_raster_image(mime: &str) -> bool {
    matches!(
        mime,
        types::JPEG | types::JPG | types::PNG | types::WEBP | types::GIF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(from_extension(Some("jpg")), types::JPEG);
        assert_eq!(from_extension(Some("webm")), types::WEBM);
        assert_eq!(from_extension(Some("exe")), types::OCTET_STREAM);
        assert_eq!(from_extension(None), types::OCTET_STREAM);
    }

    #[test]
    fn test_from_path_is_case_insensitive() {
        assert_eq!(from_path(Path::new("photo.JPG")), types::JPEG);
        assert_eq!(from_path(Path::new("clip.Mp4")), types::MP4);
    }

    #[test]
    fn test_is_raster_image() {
        assert!(is_raster_image(types::PNG));
        assert!(!is_raster_image(types::SVG));
        assert!(!is_raster_image(types::MP4));
    }
}
