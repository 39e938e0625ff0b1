//! Media uploads: aspect-ratio presets, dimension checks and ingestion.
//!
//! # Modules
//!
//! - [`preset`]: the `16x9` / `1x1` / `9x16` presets and pixel sizes
//! - [`validator`]: ratio and minimum-size check
//! - [`probe`]: reading pixel dimensions from a file header
//! - [`upload`]: upload naming, size variants and the ingest step

mod preset;
mod probe;
mod upload;
mod validator;

use std::path::PathBuf;

pub use preset::{AspectRatio, DEFAULT_TOLERANCE, Dimensions};
pub use probe::{probe, probe_lenient};
pub use upload::{
    IMAGE_SIZES, ImageSize, IngestOptions, MIME_TYPES, MediaDocument, MediaSize, ingest,
    is_allowed_mime, upload_name, variant_dimensions, variant_name,
};
pub use validator::{AspectRatioValidator, Rejection};

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("unknown aspect ratio `{0}`, expected one of 16x9, 1x1, 9x16")]
    UnknownRatio(String),

    #[error("{path}: file type `{mime}` is not allowed")]
    UnsupportedType { path: PathBuf, mime: &'static str },

    #[error("{0}: file has no extension")]
    MissingExtension(PathBuf),

    #[error("{0}")]
    Rejected(String),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl MediaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}
