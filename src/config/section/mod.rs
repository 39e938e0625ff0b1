//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sofra.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `media`    | `[media]`      | Aspect-ratio tolerance, upload output |
//! | `slug`     | `[slug]`       | Slug transliteration mode             |
//! | `validate` | `[validate]`   | Dataset check settings                |

mod media;
mod slug;
mod validate;

pub use media::MediaConfig;
pub use slug::{SlugConfig, SlugMode};
pub use validate::{ValidateConfig, ValidateLevel};
