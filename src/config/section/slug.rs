//! `[slug]` section configuration.
//!
//! ```toml
//! [slug]
//! transliterate = "turkish"   # turkish | unicode
//! ```

use serde::{Deserialize, Serialize};

/// How non-ASCII letters are folded before slug cleanup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Map `ğ ü ş ı ö ç` only; other non-ASCII letters are dropped (default).
    #[default]
    Turkish,
    /// Fold every non-ASCII character to ASCII first (`é` → `e`, `ß` → `ss`).
    Unicode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Transliteration mode used by slug hooks.
    pub transliterate: SlugMode,
}
