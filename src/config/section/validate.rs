//! `[validate]` section configuration.
//!
//! Settings for `sofra check`, the dataset-level checks that run after each
//! document passed through its collection pipeline.
//!
//! ```toml
//! [validate]
//! unique = true        # report duplicate values of unique fields
//! references = true    # report relationship ids with no target document
//! level = "error"      # error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Check unique fields across documents of a collection.
    pub unique: bool,

    /// Check that relationship and upload ids resolve.
    pub references: bool,

    /// How to treat findings: "error" or "warn".
    pub level: ValidateLevel,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            unique: true,
            references: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation failure level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Findings fail the command.
    #[default]
    Error,
    /// Findings are reported, the command succeeds.
    Warn,
}
