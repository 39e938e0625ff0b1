//! `sofra media check` and `sofra media ingest`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::CmsConfig;
use crate::media::{AspectRatio, IngestOptions, ingest, probe_lenient};
use crate::{debug, log};

/// Check an image against a preset; unreadable images pass.
pub fn check_image(file: &Path, ratio: &str, config: &CmsConfig) -> Result<()> {
    let ratio: AspectRatio = ratio.parse()?;
    if !file.is_file() {
        bail!("`{}` not found", file.display());
    }

    let Some(dims) = probe_lenient(file) else {
        log!("media"; "could not read the size of {}, skipping", file.display());
        return Ok(());
    };
    debug!("media"; "{} is {}", file.display(), dims);

    match config.media.validator().validate(ratio, dims) {
        Ok(()) => {
            log!(
                "media"; "{} ({}) fits {}",
                file.display(),
                dims,
                ratio.display_name(config.locale)
            );
            Ok(())
        }
        Err(rejection) => bail!(rejection.message(config.locale)),
    }
}

/// Ingest an upload and print its Media document as JSON.
pub fn ingest_file(
    file: &Path,
    ratio: &str,
    alt: Option<&str>,
    out: Option<&PathBuf>,
    config: &CmsConfig,
) -> Result<()> {
    let ratio: AspectRatio = ratio.parse()?;
    let validator = config.media.validator();
    let opts = IngestOptions {
        ratio,
        alt: alt.map(str::to_string),
        out_dir: out.unwrap_or(&config.media.output),
        sizes: config.media.sizes,
        validator: &validator,
        locale: config.locale,
    };

    let doc = ingest(file, &opts)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn image(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_check_image() {
        let dir = TempDir::new().unwrap();
        let mut config = CmsConfig::default();
        config.media.minimum.insert(AspectRatio::Landscape, [160, 90]);

        let wide = image(&dir, "wide.png", 160, 90);
        assert!(check_image(&wide, "16x9", &config).is_ok());

        let square = image(&dir, "square.png", 100, 100);
        let err = check_image(&square, "16x9", &config).unwrap_err();
        assert!(err.to_string().starts_with("Aspect Ratio Hatası"));

        assert!(check_image(&wide, "4x3", &config).is_err());
    }

    #[test]
    fn test_unreadable_image_passes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(check_image(&path, "1x1", &CmsConfig::default()).is_ok());
    }

    #[test]
    fn test_ingest_writes_to_out_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = CmsConfig::default();
        config.media.sizes = false;
        config.media.minimum.insert(AspectRatio::Square, [100, 100]);

        let source = image(&dir, "kare.png", 100, 100);
        let out = dir.path().join("uploads");
        ingest_file(&source, "1x1", Some("kare"), Some(&out), &config).unwrap();

        let written: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
