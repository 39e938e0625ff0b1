//! Command-line interface module.

mod args;
pub mod check;
pub mod media;
pub mod schema;
pub mod slug;
pub mod validate;

pub use args::{Cli, Commands, MediaCommand, ValidateArgs};
