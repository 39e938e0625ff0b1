//! Upload naming, resized variants and the ingest step.
//!
//! An accepted upload is stored as `<uuid>_<sizeKB>KB-xlarge.<ext>`; each
//! configured size is written next to it as `<uuid>_<sizeKB>KB-<size>.<ext>`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use image::ImageReader;
use image::imageops::FilterType;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Locale;
use crate::log;
use crate::media::{AspectRatio, AspectRatioValidator, Dimensions, MediaError, probe_lenient};
use crate::utils::mime::{self, types};

/// Accepted upload MIME types.
pub const MIME_TYPES: &[&str] = &[
    types::JPEG,
    types::JPG,
    types::PNG,
    types::WEBP,
    types::SVG,
    types::MP4,
    types::WEBM,
    types::OGG_VIDEO,
];

/// A width-bound resize target; height follows the original aspect.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageSize {
    pub name: &'static str,
    pub width: u32,
}

pub const IMAGE_SIZES: &[ImageSize] = &[
    ImageSize { name: "large", width: 1280 },
    ImageSize { name: "medium", width: 960 },
    ImageSize { name: "small", width: 640 },
    ImageSize { name: "xsmall", width: 400 },
    ImageSize { name: "xxsmall", width: 200 },
];

const ORIGINAL_SUFFIX: &str = "-xlarge";

pub fn is_allowed_mime(mime: &str) -> bool {
    MIME_TYPES.contains(&mime)
}

/// File size in KiB, rounded half up.
const fn size_kb(bytes: u64) -> u64 {
    bytes.saturating_add(512) / 1024
}

/// Fresh stored name for an upload of `bytes` bytes.
pub fn upload_name(original: &Path, bytes: u64) -> Result<String, MediaError> {
    let ext = original
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| MediaError::MissingExtension(original.to_path_buf()))?;
    Ok(format!(
        "{}_{}KB{ORIGINAL_SUFFIX}.{ext}",
        Uuid::new_v4(),
        size_kb(bytes)
    ))
}

/// Name of the `size` variant of a stored upload.
pub fn variant_name(upload: &str, size: &str) -> String {
    match upload.rsplit_once('.') {
        Some((stem, ext)) => format!("{}-{size}.{ext}", stem.replacen(ORIGINAL_SUFFIX, "", 1)),
        None => format!("{}-{size}", upload.replacen(ORIGINAL_SUFFIX, "", 1)),
    }
}

/// Size of the variant at `width`, or `None` if that would upscale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn variant_dimensions(original: Dimensions, width: u32) -> Option<Dimensions> {
    if original.is_empty() || original.width < width {
        return None;
    }
    let height = (f64::from(original.height) * f64::from(width) / f64::from(original.width))
        .round()
        .max(1.0) as u32;
    Some(Dimensions::new(width, height))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSize {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub filesize: u64,
}

/// The `media` document produced for an ingested upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDocument {
    pub filename: String,
    pub mime_type: String,
    pub filesize: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub aspect_ratio: AspectRatio,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub sizes: BTreeMap<String, MediaSize>,
}

pub struct IngestOptions<'a> {
    pub ratio: AspectRatio,
    pub alt: Option<String>,
    pub out_dir: &'a Path,
    /// Write the [`IMAGE_SIZES`] variants.
    pub sizes: bool,
    pub validator: &'a AspectRatioValidator,
    pub locale: Locale,
}

/// Validate `source`, copy it into `out_dir` under a fresh name and write
/// its size variants.
///
/// Nothing is written when the upload is rejected.
pub fn ingest(source: &Path, opts: &IngestOptions) -> Result<MediaDocument, MediaError> {
    let mime = mime::from_path(source);
    if !is_allowed_mime(mime) {
        return Err(MediaError::UnsupportedType {
            path: source.to_path_buf(),
            mime,
        });
    }

    let filesize = fs::metadata(source)
        .map_err(|err| MediaError::io(source, err))?
        .len();

    let dims = if mime::is_raster_image(mime) {
        probe_lenient(source)
    } else {
        None
    };

    if let Some(dims) = dims {
        opts.validator
            .validate(opts.ratio, dims)
            .map_err(|rejection| MediaError::Rejected(rejection.message(opts.locale)))?;
    }

    let filename = upload_name(source, filesize)?;
    fs::create_dir_all(opts.out_dir).map_err(|err| MediaError::io(opts.out_dir, err))?;
    let target = opts.out_dir.join(&filename);
    fs::copy(source, &target).map_err(|err| MediaError::io(&target, err))?;

    let sizes = match dims {
        Some(dims) if opts.sizes => write_variants(source, &filename, dims, mime, opts.out_dir)?,
        _ => BTreeMap::new(),
    };

    match dims {
        Some(dims) => {
            log!("media"; "image uploaded: {} ({}) - {} format", filename, dims, opts.ratio)
        }
        None => log!("media"; "file uploaded: {} - {} format", filename, opts.ratio),
    }

    Ok(MediaDocument {
        filename,
        mime_type: mime.to_string(),
        filesize,
        width: dims.map(|d| d.width),
        height: dims.map(|d| d.height),
        aspect_ratio: opts.ratio,
        alt: opts.alt.clone(),
        sizes,
    })
}

fn write_variants(
    source: &Path,
    filename: &str,
    dims: Dimensions,
    mime: &str,
    out_dir: &Path,
) -> Result<BTreeMap<String, MediaSize>, MediaError> {
    let img = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| MediaError::io(source, err))?
        .decode()
        .map_err(|err| MediaError::image(source, err))?;

    IMAGE_SIZES
        .par_iter()
        .filter_map(|size| variant_dimensions(dims, size.width).map(|target| (size, target)))
        .map(|(size, target)| {
            let name = variant_name(filename, size.name);
            let path = out_dir.join(&name);
            img.resize_exact(target.width, target.height, FilterType::Lanczos3)
                .save(&path)
                .map_err(|err| MediaError::image(&path, err))?;
            let filesize = fs::metadata(&path)
                .map_err(|err| MediaError::io(&path, err))?
                .len();

            Ok((
                size.name.to_string(),
                MediaSize {
                    filename: name,
                    width: target.width,
                    height: target.height,
                    mime_type: mime.to_string(),
                    filesize,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use regex::Regex;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    fn options<'a>(out_dir: &'a Path, validator: &'a AspectRatioValidator) -> IngestOptions<'a> {
        IngestOptions {
            ratio: AspectRatio::Landscape,
            alt: Some("Mercimek çorbası".into()),
            out_dir,
            sizes: true,
            validator,
            locale: Locale::Tr,
        }
    }

    #[test]
    fn test_upload_name_shape() {
        let name = upload_name(Path::new("photo.jpg"), 1536).unwrap();
        let re = Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}_2KB-xlarge\.jpg$")
            .unwrap();
        assert!(re.is_match(&name), "{name}");

        // every upload gets a fresh name
        assert_ne!(name, upload_name(Path::new("photo.jpg"), 1536).unwrap());
        assert!(upload_name(Path::new("README"), 10).is_err());
    }

    #[test]
    fn test_size_kb_rounds_half_up() {
        assert_eq!(size_kb(0), 0);
        assert_eq!(size_kb(511), 0);
        assert_eq!(size_kb(512), 1);
        assert_eq!(size_kb(1535), 1);
        assert_eq!(size_kb(1536), 2);
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(
            variant_name("3f2a_245KB-xlarge.jpg", "medium"),
            "3f2a_245KB-medium.jpg"
        );
        assert_eq!(variant_name("plain.png", "small"), "plain-small.png");
    }

    #[test]
    fn test_variant_dimensions() {
        let hd = Dimensions::new(1920, 1080);
        assert_eq!(variant_dimensions(hd, 1280), Some(Dimensions::new(1280, 720)));
        assert_eq!(variant_dimensions(hd, 200), Some(Dimensions::new(200, 113)));
        assert_eq!(variant_dimensions(Dimensions::new(300, 300), 400), None);
        assert_eq!(variant_dimensions(Dimensions::new(0, 0), 200), None);
    }

    #[test]
    fn test_allowed_mime_types() {
        assert!(is_allowed_mime(types::SVG));
        assert!(is_allowed_mime(types::OGG_VIDEO));
        assert!(!is_allowed_mime(types::GIF));
        assert!(!is_allowed_mime(types::OCTET_STREAM));
    }

    #[test]
    fn test_ingest_writes_original_and_variants() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = write_png(src.path(), "banner.png", 640, 360);
        let validator = AspectRatioValidator::new()
            .with_minimum(AspectRatio::Landscape, Dimensions::new(640, 360));

        let doc = ingest(&path, &options(out.path(), &validator)).unwrap();

        assert!(doc.filename.ends_with("KB-xlarge.png"));
        assert!(out.path().join(&doc.filename).is_file());
        assert_eq!(doc.mime_type, types::PNG);
        assert_eq!((doc.width, doc.height), (Some(640), Some(360)));
        assert_eq!(doc.alt.as_deref(), Some("Mercimek çorbası"));

        // large and medium would upscale
        let names: Vec<_> = doc.sizes.keys().map(String::as_str).collect();
        assert_eq!(names, ["small", "xsmall", "xxsmall"]);

        let xsmall = &doc.sizes["xsmall"];
        assert_eq!((xsmall.width, xsmall.height), (400, 225));
        assert!(xsmall.filename.ends_with("KB-xsmall.png"));
        assert_eq!(
            crate::media::probe(&out.path().join(&xsmall.filename)).unwrap(),
            Dimensions::new(400, 225)
        );
    }

    #[test]
    fn test_ingest_without_sizes() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = write_png(src.path(), "banner.png", 640, 360);
        let validator = AspectRatioValidator::new()
            .with_minimum(AspectRatio::Landscape, Dimensions::new(640, 360));

        let mut opts = options(out.path(), &validator);
        opts.sizes = false;
        let doc = ingest(&path, &opts).unwrap();

        assert!(doc.sizes.is_empty());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_ingest_rejection_writes_nothing() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let target = out.path().join("media");
        let path = write_png(src.path(), "square.png", 100, 100);
        let validator = AspectRatioValidator::new();

        let err = ingest(&path, &options(&target, &validator)).unwrap_err();
        assert!(err.to_string().starts_with("Aspect Ratio Hatası"));
        assert!(!target.exists());
    }

    #[test]
    fn test_ingest_unsupported_type() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = src.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let validator = AspectRatioValidator::new();

        let err = ingest(&path, &options(out.path(), &validator)).unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType { .. }));
    }

    #[test]
    fn test_ingest_svg_skips_dimension_check() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = src.path().join("logo.svg");
        fs::write(&path, r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#)
            .unwrap();
        let validator = AspectRatioValidator::new();

        let doc = ingest(&path, &options(out.path(), &validator)).unwrap();
        assert_eq!(doc.mime_type, types::SVG);
        assert_eq!(doc.width, None);
        assert!(doc.sizes.is_empty());
    }

    #[test]
    fn test_document_json_shape() {
        let doc = MediaDocument {
            filename: "a_1KB-xlarge.png".into(),
            mime_type: types::PNG.into(),
            filesize: 1024,
            width: Some(1920),
            height: Some(1080),
            aspect_ratio: AspectRatio::Landscape,
            alt: None,
            sizes: BTreeMap::new(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["aspectRatio"], "16x9");
        assert!(json.get("alt").is_none());
    }
}
