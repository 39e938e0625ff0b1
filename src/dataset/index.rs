//! Cross-document indexes: unique values and relationship references.

use serde_json::{Map, Value};

use crate::schema::{CollectionConfig, Field, FieldKind, data_fields};

/// A relationship or upload id found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Dotted data path of the id.
    pub path: String,
    pub target: &'static str,
    pub id: String,
}

/// Every relationship id stored in `obj`, at any depth.
pub fn references(
    fields: &[Field],
    obj: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<Reference>,
) {
    for field in data_fields(fields) {
        let Some(name) = field.name else { continue };
        let Some(value) = obj.get(name) else { continue };
        let path = join(prefix, name);

        if let Some((target, has_many)) = field.relation() {
            let ids: Vec<(String, &Value)> = if has_many {
                value
                    .as_array()
                    .into_iter()
                    .flatten()
                    .enumerate()
                    .map(|(i, id)| (join(&path, &i.to_string()), id))
                    .collect()
            } else {
                vec![(path.clone(), value)]
            };
            for (path, id) in ids {
                if let Some(id) = id.as_str().filter(|id| !id.is_empty()) {
                    out.push(Reference {
                        path,
                        target,
                        id: id.to_string(),
                    });
                }
            }
            continue;
        }

        match (&field.kind, value) {
            (FieldKind::Group { fields }, Value::Object(inner)) => {
                references(fields, inner, &path, out);
            }
            (FieldKind::Array { fields, .. }, Value::Array(rows)) => {
                for (i, row) in rows.iter().enumerate() {
                    if let Value::Object(row) = row {
                        references(fields, row, &join(&path, &i.to_string()), out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// `(field, value)` of every unique top-level field that holds a value.
/// `null` and absent values are never duplicates; empty strings are.
pub fn unique_values(
    collection: &CollectionConfig,
    obj: &Map<String, Value>,
) -> Vec<(&'static str, String)> {
    collection
        .data_fields()
        .into_iter()
        .filter(|field| field.unique)
        .filter_map(|field| {
            let name = field.name?;
            let key = match obj.get(name)? {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((name, key))
        })
        .collect()
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{find, recipes};
    use serde_json::json;

    #[test]
    fn test_recipe_references() {
        let recipes = find("recipes").unwrap();
        let mut doc = recipes::sample();
        doc["dietaryInfo"] = json!([{ "diet": "vegan" }]);
        doc["image16x9"] = json!("m1");

        let mut out = Vec::new();
        references(&recipes.fields, doc.as_object().unwrap(), "", &mut out);
        let found: Vec<_> = out
            .iter()
            .map(|r| (r.path.as_str(), r.target, r.id.as_str()))
            .collect();
        assert_eq!(
            found,
            [
                ("category", "categories", "cat-1"),
                ("image16x9", "media", "m1"),
                ("difficulty", "difficultyLevels", "easy"),
                ("dietaryInfo.0.diet", "dietaryTypes", "vegan"),
                ("ingredients.0.ingredient", "ingredients", "lentil"),
                ("ingredients.0.unit", "ingredientUnits", "cup"),
            ]
        );
    }

    #[test]
    fn test_has_many_references() {
        let cuisines = find("cuisines").unwrap();
        let doc = json!({ "geographicScope": { "countries": ["tr", "", "gr"] } });
        let mut out = Vec::new();
        references(&cuisines.fields, doc.as_object().unwrap(), "", &mut out);
        let paths: Vec<_> = out.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["geographicScope.countries.0", "geographicScope.countries.2"]);
    }

    #[test]
    fn test_unique_values() {
        let countries = find("countries").unwrap();
        let doc = json!({ "name": "Türkiye", "code": "TR", "slug": null });
        let values = unique_values(countries, doc.as_object().unwrap());
        assert_eq!(values, [("name", "Türkiye".to_string()), ("code", "TR".to_string())]);

        let doc = json!({ "name": "" });
        let values = unique_values(countries, doc.as_object().unwrap());
        assert_eq!(values, [("name", String::new())]);
    }
}
