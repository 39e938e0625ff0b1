//! `[media]` section configuration.
//!
//! ```toml
//! [media]
//! tolerance = 0.1        # allowed |width/height - ratio| deviation
//! output = "media"       # upload directory (relative to project root, `~` expanded)
//! sizes = true           # write resized variants on ingest
//!
//! [media.minimum]        # per-preset minimum size overrides
//! "16x9" = [1280, 720]
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::media::{AspectRatio, AspectRatioValidator, DEFAULT_TOLERANCE, Dimensions};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Allowed deviation between measured and preset ratio.
    pub tolerance: f64,

    /// Directory where ingested uploads and their variants are written.
    pub output: PathBuf,

    /// Generate the configured image-size variants on ingest.
    pub sizes: bool,

    /// Minimum dimensions per preset, overriding the built-in table.
    pub minimum: BTreeMap<AspectRatio, [u32; 2]>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            output: PathBuf::from("media"),
            sizes: true,
            minimum: BTreeMap::new(),
        }
    }
}

impl MediaConfig {
    pub const TOLERANCE: FieldPath = FieldPath::new("media.tolerance");
    pub const OUTPUT: FieldPath = FieldPath::new("media.output");
    pub const MINIMUM: FieldPath = FieldPath::new("media.minimum");

    /// Build the aspect-ratio validator described by this section.
    pub fn validator(&self) -> AspectRatioValidator {
        let mut validator = AspectRatioValidator::new().with_tolerance(self.tolerance);
        for (ratio, [width, height]) in &self.minimum {
            validator = validator.with_minimum(*ratio, Dimensions::new(*width, *height));
        }
        validator
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(self.tolerance > 0.0 && self.tolerance <= 1.0) {
            diag.error_or_default(
                Self::TOLERANCE,
                format!("must be in (0, 1], got {}", self.tolerance),
                DEFAULT_TOLERANCE,
            );
        }

        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "cannot be empty");
        }

        for (ratio, [width, height]) in &self.minimum {
            if *width == 0 || *height == 0 {
                diag.error(
                    Self::MINIMUM,
                    format!("`{}` must be non-zero, got {width}x{height}", ratio.value()),
                );
            }
        }
    }
}
