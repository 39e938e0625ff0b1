//! Project configuration management for `sofra.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── media      # [media]
//! │   ├── slug       # [slug]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics grouped by section
//! │   └── field      # FieldPath
//! └── mod.rs         # CmsConfig (this file)
//! ```
//!
//! A missing `sofra.toml` is not an error: every key has a default, so the
//! CLI works out of the box in any directory.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_path};

pub use section::{MediaConfig, SlugConfig, SlugMode, ValidateConfig, ValidateLevel};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, debug, locale::Locale, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sofra.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Locale for validation messages
    pub locale: Locale,

    /// Slug generation settings
    pub slug: SlugConfig,

    /// Upload and aspect-ratio settings
    pub media: MediaConfig,

    /// Dataset check settings
    pub validate: ValidateConfig,
}

impl CmsConfig {
    /// Load configuration for the CLI invocation.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Resolve paths against the project root.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.media.output = resolve_path(&self.media.output, root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Parse)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.media.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Invalid(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CmsConfig {
    let (parsed, ignored) = CmsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = CmsConfig::from_str("[media\ntolerance = 0.1");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = test_parse_config("");
        assert_eq!(config.locale, Locale::Tr);
        assert_eq!(config.slug.transliterate, SlugMode::Turkish);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_locale_parsing() {
        let config = test_parse_config("locale = \"en\"");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "locale = \"tr\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = CmsConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.locale, Locale::Tr);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_finalize_resolves_media_output() {
        let mut config = test_parse_config("[media]\noutput = \"uploads\"");
        config.finalize(Path::new("/srv/cms"));
        assert_eq!(config.root, PathBuf::from("/srv/cms"));
        assert_eq!(config.media.output, PathBuf::from("/srv/cms/uploads"));
    }

    #[test]
    fn test_validate_reports_diagnostics() {
        let config = test_parse_config("[media]\ntolerance = 2.0");
        let err = config.validate().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("[media]"));
        assert!(display.contains("tolerance"));
        assert!(display.contains("(default: 0.1)"));
    }
}
