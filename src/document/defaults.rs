//! `defaultValue` application.

use serde_json::{Map, Value};

use crate::schema::{Field, FieldKind, data_fields};

/// Fill absent keys with their declared defaults, descending into groups and
/// array rows. Explicit `null` is kept as supplied.
pub fn apply(fields: &[Field], obj: &mut Map<String, Value>) {
    for field in data_fields(fields) {
        let Some(name) = field.name else { continue };

        if let Some(default) = &field.default_value {
            obj.entry(name).or_insert_with(|| default.clone());
        }

        match &field.kind {
            FieldKind::Group { fields } => match obj.get_mut(name) {
                Some(Value::Object(inner)) => apply(fields, inner),
                Some(_) => {}
                None => {
                    let mut inner = Map::new();
                    apply(fields, &mut inner);
                    if !inner.is_empty() {
                        obj.insert(name.to_string(), Value::Object(inner));
                    }
                }
            },
            FieldKind::Array { fields, .. } => {
                if let Some(Value::Array(rows)) = obj.get_mut(name) {
                    for row in rows {
                        if let Value::Object(row) = row {
                            apply(fields, row);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
