//! Field validation.
//!
//! Walks the schema alongside the document and records one message per
//! failing field. Empty optional fields are skipped, and a field with a type
//! or bound error does not reach its custom validator. The category name and
//! recipe title rules decide for themselves what a blank value means.

use serde_json::{Map, Value};

use super::value::{display, is_blank};
use super::{Context, ValidationErrors, rules};
use crate::locale::Message;
use crate::schema::{Field, FieldKind, SelectOption, Validator, data_fields};
use crate::utils::date::DateTimeUtc;

pub struct Validation<'a> {
    ctx: &'a Context,
    errors: ValidationErrors,
}

impl<'a> Validation<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            errors: ValidationErrors::default(),
        }
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }

    /// Validate every data field stored in `obj`.
    pub fn fields(&mut self, fields: &[Field], obj: &Map<String, Value>, prefix: &str) {
        for field in data_fields(fields) {
            let Some(name) = field.name else { continue };
            let path = join(prefix, name);
            self.field(field, obj.get(name), &path);
        }
    }

    fn report(&mut self, path: &str, message: Message) {
        self.errors.push(path, message.render(self.ctx.locale));
    }

    fn field(&mut self, field: &Field, value: Option<&Value>, path: &str) {
        let Some(value) = value.filter(|v| !is_blank(Some(*v))) else {
            let message = match field.validate {
                Some(validator @ (Validator::CategoryName | Validator::RecipeTitle)) => {
                    rules::check(validator, value.unwrap_or(&Value::Null), self.ctx).err()
                }
                Some(Validator::AspectRatio) if field.required => {
                    Some(Message::AspectRatioRequired)
                }
                _ if field.required => Some(Message::Required),
                _ => None,
            };
            if let Some(message) = message {
                self.report(path, message);
            }
            return;
        };

        let before = self.errors.len();
        if let Err(message) = self.kind(&field.kind, value, path) {
            self.report(path, message);
        }
        if self.errors.len() > before {
            return;
        }

        if let Some(validator) = field.validate
            && let Err(message) = rules::check(validator, value, self.ctx)
        {
            self.report(path, message);
        }
    }

    /// Type and bound checks. Nested errors are reported directly; the
    /// returned message belongs to `path` itself.
    fn kind(&mut self, kind: &FieldKind, value: &Value, path: &str) -> Result<(), Message> {
        match kind {
            FieldKind::Text {
                min_length,
                max_length,
            }
            | FieldKind::Textarea {
                min_length,
                max_length,
            } => {
                let text = value.as_str().ok_or(Message::NotText)?;
                check_length(text, *min_length, *max_length)
            }
            FieldKind::Email => {
                let text = value.as_str().ok_or(Message::NotText)?;
                if !is_email(text) {
                    return Err(Message::InvalidEmail);
                }
                Ok(())
            }
            FieldKind::RichText => Ok(()),
            FieldKind::Number { min, max } => {
                let n = value.as_f64().ok_or(Message::NotNumber)?;
                if let Some(min) = *min
                    && n < min
                {
                    return Err(Message::BelowMin { min });
                }
                if let Some(max) = *max
                    && n > max
                {
                    return Err(Message::AboveMax { max });
                }
                Ok(())
            }
            FieldKind::Checkbox => value.as_bool().map(|_| ()).ok_or(Message::NotBoolean),
            FieldKind::Select { options } => check_option(options, value),
            FieldKind::Date => match value.as_str() {
                Some(text) if DateTimeUtc::parse(text).is_some() => Ok(()),
                _ => Err(Message::InvalidDate),
            },
            FieldKind::Relationship { has_many: true, .. } => {
                let ids = value.as_array().ok_or(Message::NotArray)?;
                for (i, id) in ids.iter().enumerate() {
                    if !is_id(id) {
                        self.report(&join(path, &i.to_string()), Message::InvalidRelation);
                    }
                }
                Ok(())
            }
            FieldKind::Relationship { .. } | FieldKind::Upload { .. } => {
                if is_id(value) {
                    Ok(())
                } else {
                    Err(Message::InvalidRelation)
                }
            }
            FieldKind::Array {
                fields,
                min_rows,
                max_rows,
            } => {
                let rows = value.as_array().ok_or(Message::NotArray)?;
                for (i, row) in rows.iter().enumerate() {
                    let row_path = join(path, &i.to_string());
                    match row {
                        Value::Object(row) => self.fields(fields, row, &row_path),
                        _ => self.report(&row_path, Message::NotObject),
                    }
                }
                if let Some(min) = *min_rows
                    && rows.len() < min
                {
                    return Err(Message::TooFewRows { min });
                }
                if let Some(max) = *max_rows
                    && rows.len() > max
                {
                    return Err(Message::TooManyRows { max });
                }
                Ok(())
            }
            FieldKind::Group { fields } => {
                let inner = value.as_object().ok_or(Message::NotObject)?;
                self.fields(fields, inner, path);
                Ok(())
            }
            // never stored under a key of their own
            FieldKind::Row { .. } | FieldKind::Tabs { .. } => Ok(()),
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Lengths count characters, not bytes.
fn check_length(text: &str, min: Option<usize>, max: Option<usize>) -> Result<(), Message> {
    let len = text.chars().count();
    if let Some(min) = min
        && len < min
    {
        return Err(Message::TooShort { min });
    }
    if let Some(max) = max
        && len > max
    {
        return Err(Message::TooLong { max });
    }
    Ok(())
}

fn check_option(options: &[SelectOption], value: &Value) -> Result<(), Message> {
    match value.as_str() {
        Some(chosen) if options.iter().any(|o| o.value == chosen) => Ok(()),
        _ => Err(Message::InvalidOption {
            value: display(value),
        }),
    }
}

/// Document ids are non-empty strings.
fn is_id(value: &Value) -> bool {
    value.as_str().is_some_and(|id| !id.trim().is_empty())
}

/// One `@` with a non-empty local part and a dotted domain.
fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !text.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
