//! Typed content-model declarations.
//!
//! # Modules
//!
//! - [`field`]: field kinds, validators and field hooks
//! - [`collection`]: collection settings and document hooks
//! - [`access`]: read access rules
//! - [`common`]: field groups shared across collections

mod access;
mod collection;
pub mod common;
mod field;

pub use access::ReadAccess;
pub use collection::{AdminGroup, CollectionAdmin, CollectionConfig, CollectionHook, UploadConfig};
pub use field::{
    Admin, Condition, Field, FieldHook, FieldKind, SelectOption, Tab, Validator, data_fields,
    options,
};
