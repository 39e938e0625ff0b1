//! Aspect-ratio and minimum-size check for image uploads.
//!
//! The ratio is checked first; an image with the right shape is then
//! checked against the preset minimum. Images whose size could not be
//! measured are accepted.

use rustc_hash::FxHashMap;

use crate::locale::Locale;
use crate::media::{AspectRatio, DEFAULT_TOLERANCE, Dimensions};

/// Why an upload was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Measured ratio is further than the tolerance from the preset.
    AspectRatio {
        ratio: AspectRatio,
        actual: Dimensions,
    },
    /// Right shape, but smaller than the preset minimum.
    Undersized {
        ratio: AspectRatio,
        minimum: Dimensions,
        actual: Dimensions,
    },
}

impl Rejection {
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Self::AspectRatio { ratio, actual }, Locale::Tr) => format!(
                "Aspect Ratio Hatası: {} seçimi için {} boyutunda görsel yükleyin. (Mevcut: {})",
                ratio.display_name(locale),
                ratio.recommended(),
                actual
            ),
            (Self::AspectRatio { ratio, actual }, Locale::En) => format!(
                "Aspect ratio mismatch: upload a {} image for {}. (Current: {})",
                ratio.recommended(),
                ratio.display_name(locale),
                actual
            ),
            (
                Self::Undersized {
                    ratio,
                    minimum,
                    actual,
                },
                Locale::Tr,
            ) => format!(
                "Boyut Yetersiz: Minimum {} gerekli. Mevcut: {}. İdeal: {}",
                minimum,
                actual,
                ratio.recommended()
            ),
            (
                Self::Undersized {
                    ratio,
                    minimum,
                    actual,
                },
                Locale::En,
            ) => format!(
                "Image too small: minimum {} required. Current: {}. Ideal: {}",
                minimum,
                actual,
                ratio.recommended()
            ),
        }
    }
}

/// Builder-configured validator; defaults to the preset table.
#[derive(Debug, Clone)]
pub struct AspectRatioValidator {
    tolerance: f64,
    minimum: FxHashMap<AspectRatio, Dimensions>,
}

impl Default for AspectRatioValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AspectRatioValidator {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            minimum: FxHashMap::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the minimum size for one preset.
    pub fn with_minimum(mut self, ratio: AspectRatio, minimum: Dimensions) -> Self {
        self.minimum.insert(ratio, minimum);
        self
    }

    pub fn minimum(&self, ratio: AspectRatio) -> Dimensions {
        self.minimum
            .get(&ratio)
            .copied()
            .unwrap_or_else(|| ratio.recommended())
    }

    pub fn validate(&self, ratio: AspectRatio, actual: Dimensions) -> Result<(), Rejection> {
        if actual.is_empty() {
            return Ok(());
        }

        if (actual.ratio() - ratio.ratio()).abs() > self.tolerance {
            return Err(Rejection::AspectRatio { ratio, actual });
        }

        let minimum = self.minimum(ratio);
        if !actual.covers(minimum) {
            return Err(Rejection::Undersized {
                ratio,
                minimum,
                actual,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(ratio: AspectRatio, width: u32, height: u32) -> Result<(), Rejection> {
        AspectRatioValidator::new().validate(ratio, Dimensions::new(width, height))
    }

    #[test]
    fn test_accepts_recommended_sizes() {
        assert!(check(AspectRatio::Landscape, 1920, 1080).is_ok());
        assert!(check(AspectRatio::Square, 1920, 1920).is_ok());
        assert!(check(AspectRatio::Portrait, 1920, 3413).is_ok());
        assert!(check(AspectRatio::Landscape, 3840, 2160).is_ok());
    }

    #[test]
    fn test_rejects_square_for_landscape() {
        let err = check(AspectRatio::Landscape, 1000, 1000).unwrap_err();
        assert!(matches!(err, Rejection::AspectRatio { .. }));
        assert_eq!(
            err.message(Locale::Tr),
            "Aspect Ratio Hatası: 16:9 Yatay seçimi için 1920×1080 boyutunda görsel yükleyin. (Mevcut: 1000×1000)"
        );
    }

    #[test]
    fn test_ratio_checked_before_size() {
        // small and wrong shape: the ratio error wins
        let err = check(AspectRatio::Square, 160, 90).unwrap_err();
        assert!(matches!(err, Rejection::AspectRatio { .. }));
    }

    #[test]
    fn test_undersized() {
        let err = check(AspectRatio::Landscape, 1280, 720).unwrap_err();
        assert_eq!(
            err,
            Rejection::Undersized {
                ratio: AspectRatio::Landscape,
                minimum: Dimensions::new(1920, 1080),
                actual: Dimensions::new(1280, 720),
            }
        );
        assert_eq!(
            err.message(Locale::Tr),
            "Boyut Yetersiz: Minimum 1920×1080 gerekli. Mevcut: 1280×720. İdeal: 1920×1080"
        );
        assert_eq!(
            err.message(Locale::En),
            "Image too small: minimum 1920×1080 required. Current: 1280×720. Ideal: 1920×1080"
        );
    }

    #[test]
    fn test_tolerance_boundary() {
        // 2000/1000 = 2.0, |2.0 - 1.777| > 0.1
        assert!(check(AspectRatio::Landscape, 2000, 1000).is_err());
        // 1920/1100 = 1.745, within 0.1 of 16/9
        assert!(check(AspectRatio::Landscape, 1920, 1100).is_ok());

        let strict = AspectRatioValidator::new().with_tolerance(0.01);
        assert!(
            strict
                .validate(AspectRatio::Landscape, Dimensions::new(1920, 1100))
                .is_err()
        );
    }

    #[test]
    fn test_portrait_is_checked_against_one_half() {
        // 1920/4400 = 0.436, within 0.1 of 1/2 but not of 9/16
        assert!(check(AspectRatio::Portrait, 1920, 4400).is_ok());
        // 1920/3000 = 0.64, within 0.1 of 9/16 but not of 1/2
        assert!(matches!(
            check(AspectRatio::Portrait, 1920, 3000),
            Err(Rejection::AspectRatio { .. })
        ));
        assert!(matches!(
            check(AspectRatio::Portrait, 1000, 2000),
            Err(Rejection::Undersized { .. })
        ));
        assert!(matches!(
            check(AspectRatio::Portrait, 1080, 1080),
            Err(Rejection::AspectRatio { .. })
        ));
    }

    #[test]
    fn test_minimum_override() {
        let validator = AspectRatioValidator::new()
            .with_minimum(AspectRatio::Landscape, Dimensions::new(1280, 720));
        assert!(
            validator
                .validate(AspectRatio::Landscape, Dimensions::new(1280, 720))
                .is_ok()
        );
        // other presets keep the table minimum
        assert_eq!(
            validator.minimum(AspectRatio::Square),
            Dimensions::new(1920, 1920)
        );
    }

    #[test]
    fn test_unmeasured_image_passes() {
        assert!(check(AspectRatio::Square, 0, 0).is_ok());
        assert!(check(AspectRatio::Square, 500, 0).is_ok());
    }
}
