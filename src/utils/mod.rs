//! Shared utilities.
//!
//! - [`date`]: UTC datetime parsing and formatting
//! - [`mime`]: MIME type detection by extension
//! - [`plural`]: pluralization for report output

pub mod date;
pub mod mime;
mod plural;

pub use plural::{plural_count, plural_s};
