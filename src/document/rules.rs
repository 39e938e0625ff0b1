//! Custom field validators.
//!
//! Run only after the generic checks of a field passed. The category name
//! and recipe title rules also receive blank values, since they replace the
//! required check of their field.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::Context;
use crate::locale::Message;
use crate::media::AspectRatio;
use crate::schema::Validator;

static BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+$").unwrap());
static DOUBLE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static CATEGORY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} _-]+$").unwrap());
static RECIPE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} _.,()-]+$").unwrap());

pub fn check(validator: Validator, value: &Value, ctx: &Context) -> Result<(), Message> {
    match validator {
        Validator::CategoryName => category_name(value),
        Validator::RecipeTitle => recipe_title(value),
        Validator::Url => url(value),
        Validator::AspectRatio => aspect_ratio(value, ctx),
    }
}

fn category_name(value: &Value) -> Result<(), Message> {
    let name = value.as_str().ok_or(Message::CategoryNameNotText)?;
    if BLANK.is_match(name) {
        return Err(Message::CategoryNameBlank);
    }
    if !CATEGORY_NAME.is_match(name) {
        return Err(Message::CategoryNameCharset);
    }
    Ok(())
}

fn recipe_title(value: &Value) -> Result<(), Message> {
    let title = value.as_str().ok_or(Message::RecipeTitleNotText)?;
    if BLANK.is_match(title) {
        return Err(Message::RecipeTitleBlank);
    }
    if DOUBLE_SPACE.is_match(title) {
        return Err(Message::RecipeTitleDoubleSpace);
    }
    if !RECIPE_TITLE.is_match(title) {
        return Err(Message::RecipeTitleCharset);
    }
    Ok(())
}

/// Absolute URL when present; an empty string counts as absent.
fn url(value: &Value) -> Result<(), Message> {
    let text = value.as_str().ok_or(Message::UrlNotText)?;
    if text.is_empty() {
        return Ok(());
    }
    url::Url::parse(text).map_err(|_| Message::UrlInvalid)?;
    Ok(())
}

/// Checks the file attached to the request. Stored documents without a new
/// upload are not re-measured.
fn aspect_ratio(value: &Value, ctx: &Context) -> Result<(), Message> {
    let Some(ratio) = value.as_str().and_then(|v| v.parse::<AspectRatio>().ok()) else {
        return Ok(());
    };
    let Some(dims) = ctx.upload else {
        return Ok(());
    };
    ctx.validator
        .validate(ratio, dims)
        .map_err(|rejection| Message::Custom(rejection.message(ctx.locale)))
}
