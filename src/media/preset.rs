//! The three fixed aspect-ratio presets an upload can declare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::media::MediaError;

/// Allowed deviation between the measured and the declared ratio.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Declared aspect ratio of an upload, stored as `16x9`, `1x1` or `9x16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16x9")]
    Landscape,
    #[serde(rename = "1x1")]
    Square,
    #[serde(rename = "9x16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [Self; 3] = [Self::Landscape, Self::Square, Self::Portrait];

    /// Stored select value.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Landscape => "16x9",
            Self::Square => "1x1",
            Self::Portrait => "9x16",
        }
    }

    /// Width divided by height that uploads are compared against.
    ///
    /// The portrait preset is checked against 1:2 even though its label and
    /// recommended size say 9:16.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Landscape => 16.0 / 9.0,
            Self::Square => 1.0,
            Self::Portrait => 1.0 / 2.0,
        }
    }

    pub const fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Landscape, Locale::Tr) => "16:9 Yatay",
            (Self::Square, Locale::Tr) => "1:1 Kare",
            (Self::Portrait, Locale::Tr) => "9:16 Dikey",
            (Self::Landscape, Locale::En) => "16:9 Landscape",
            (Self::Square, Locale::En) => "1:1 Square",
            (Self::Portrait, Locale::En) => "9:16 Portrait",
        }
    }

    /// Ideal upload size, also the default minimum.
    pub const fn recommended(self) -> Dimensions {
        match self {
            Self::Landscape => Dimensions::new(1920, 1080),
            Self::Square => Dimensions::new(1920, 1920),
            Self::Portrait => Dimensions::new(1920, 3413),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for AspectRatio {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.value() == s)
            .ok_or_else(|| MediaError::UnknownRatio(s.to_string()))
    }
}

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if both sides are at least as large as `other`.
    pub const fn covers(self, other: Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_round_trip_through_from_str() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.value().parse::<AspectRatio>().unwrap(), ratio);
        }
        assert!("4x3".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_value() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9x16\"");
    }

    #[test]
    fn test_recommended_sizes_fit_their_ratio() {
        for ratio in AspectRatio::ALL {
            let diff = (ratio.recommended().ratio() - ratio.ratio()).abs();
            assert!(
                diff <= DEFAULT_TOLERANCE,
                "{ratio} recommended size is off by {diff}"
            );
        }
    }
}
