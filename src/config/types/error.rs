//! Errors raised while loading `sofra.toml`.

use super::FieldPath;
use crate::utils::plural_count;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(toml::de::Error),

    // no #[source]: the diagnostics render themselves in full
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// A setting a section validator refused.
#[derive(Debug, Clone)]
pub struct InvalidSetting {
    pub field: FieldPath,
    pub message: String,
    /// Value used when the key is left out, shown as a way back.
    pub default: Option<String>,
}

/// Every refused setting of one load, grouped by section when printed:
///
/// ```text
/// sofra.toml: 2 invalid settings
/// [media]
///   tolerance → must be in (0, 1], got 2 (default: 0.1)
///   output → cannot be empty
/// ```
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    settings: Vec<InvalidSetting>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    /// Refuse a setting and point at its default.
    pub fn error_or_default(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        default: impl fmt::Display,
    ) {
        self.push(field, message.into(), Some(default.to_string()));
    }

    fn push(&mut self, field: FieldPath, message: String, default: Option<String>) {
        self.settings.push(InvalidSetting {
            field,
            message,
            default,
        });
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections: BTreeMap<&str, Vec<&InvalidSetting>> = BTreeMap::new();
        for setting in &self.settings {
            sections
                .entry(setting.field.section())
                .or_default()
                .push(setting);
        }

        let header = format!(
            "sofra.toml: {}",
            plural_count(self.len(), "invalid setting")
        );
        write!(f, "{}", header.red().bold())?;
        for (section, settings) in sections {
            if section.is_empty() {
                write!(f, "\n{}", "(top level)".dimmed())?;
            } else {
                write!(f, "\n{}", format_args!("[{section}]").cyan())?;
            }
            for setting in settings {
                write!(
                    f,
                    "\n  {} {} {}",
                    setting.field.key(),
                    "→".red(),
                    setting.message
                )?;
                if let Some(default) = &setting.default {
                    write!(f, " {}", format_args!("(default: {default})").dimmed())?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_read_error_names_the_file() {
        let err = ConfigError::Read(
            PathBuf::from("/srv/cms/sofra.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read `/srv/cms/sofra.toml`");
    }

    #[test]
    fn test_parse_error_keeps_toml_detail() {
        let toml_err = toml::from_str::<toml::Table>("locale = ").unwrap_err();
        let err = ConfigError::Parse(toml_err);
        assert!(err.to_string().starts_with("invalid TOML: "));
        assert!(err.to_string().len() > "invalid TOML: ".len());
    }

    #[test]
    fn test_settings_grouped_by_section() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error_or_default(FieldPath::new("media.tolerance"), "out of range", 0.1);
        diag.error(FieldPath::new("validate.level"), "unknown level");
        diag.error(FieldPath::new("media.output"), "cannot be empty");
        assert_eq!(diag.len(), 3);
        assert_eq!(diag.settings[0].default.as_deref(), Some("0.1"));
        assert_eq!(diag.settings[1].default, None);

        let display = diag.to_string();
        assert!(display.contains("3 invalid settings"));
        // one header per section, media before validate
        assert_eq!(display.matches("[media]").count(), 1);
        let media = display.find("[media]").unwrap();
        let validate = display.find("[validate]").unwrap();
        assert!(media < validate);
        assert!(display.contains("tolerance"));
        assert!(display.contains("out of range"));
        assert!(display.contains("(default: 0.1)"));
        assert!(display.contains("output"));

        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_empty_diagnostics_are_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
