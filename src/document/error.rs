//! Document pipeline errors.

use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;

use crate::utils::plural_s;

/// One failed field, addressed by its dotted data path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted path such as `ingredients.0.amount`.
    pub path: String,
    /// Localized message.
    pub message: String,
}

/// Every field error of one document, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message reported for `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        write!(
            f,
            "{}",
            format!("validation failed ({count} field{})", plural_s(count))
                .red()
                .bold()
        )?;
        for error in &self.errors {
            write!(
                f,
                "\n{}{}{} {} {}",
                "[".dimmed(),
                error.path.cyan(),
                "]".dimmed(),
                "→".red(),
                error.message
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document must be a JSON object")]
    NotObject,

    // No #[from]: the errors print themselves, source() would repeat them
    #[error("{0}")]
    Invalid(ValidationErrors),
}

impl DocumentError {
    /// Field errors, when the document reached validation.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotObject => None,
        }
    }
}
