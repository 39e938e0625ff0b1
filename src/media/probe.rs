//! Pixel dimensions from an image header, without decoding the pixels.

use std::path::Path;

use image::ImageReader;

use crate::debug;
use crate::media::{Dimensions, MediaError};

pub fn probe(path: &Path) -> Result<Dimensions, MediaError> {
    let (width, height) = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| MediaError::io(path, err))?
        .into_dimensions()
        .map_err(|err| MediaError::image(path, err))?;
    Ok(Dimensions::new(width, height))
}

/// Like [`probe`], but a failure only yields `None`: an image that cannot
/// be measured is not rejected.
pub fn probe_lenient(path: &Path) -> Option<Dimensions> {
    match probe(path) {
        Ok(dims) => Some(dims),
        Err(err) => {
            debug!("media"; "could not read dimensions: {}", err);
            None
        }
    }
}
