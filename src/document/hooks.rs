//! Before-validate hooks.
//!
//! Field hooks run first and see their siblings (the object the field is
//! stored in). Collection hooks run afterwards on the top-level document.

use serde_json::{Map, Value};

use super::value::{is_truthy, number};
use crate::config::SlugMode;
use crate::schema::{CollectionHook, Field, FieldHook, FieldKind, data_fields};
use crate::slug::{normalize_explicit, slugify_with};
use crate::utils::date::DateTimeUtc;

/// Run every field hook, descending into groups and array rows.
pub fn run_field_hooks(fields: &[Field], obj: &mut Map<String, Value>, mode: SlugMode) {
    for field in data_fields(fields) {
        let Some(name) = field.name else { continue };

        for hook in &field.hooks {
            match hook {
                FieldHook::DeriveSlug { from } => derive_slug_field(obj, name, from, mode),
                FieldHook::Sum { of } => {
                    let total: f64 = of
                        .iter()
                        .map(|key| obj.get(*key).and_then(Value::as_f64).unwrap_or(0.0))
                        .sum();
                    obj.insert(name.to_string(), number(total));
                }
            }
        }

        match (&field.kind, obj.get_mut(name)) {
            (FieldKind::Group { fields }, Some(Value::Object(inner))) => {
                run_field_hooks(fields, inner, mode);
            }
            (FieldKind::Array { fields, .. }, Some(Value::Array(rows))) => {
                for row in rows {
                    if let Value::Object(row) = row {
                        run_field_hooks(fields, row, mode);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Empty slug: derive from the source. Supplied slug: lowercase and trim.
fn derive_slug_field(obj: &mut Map<String, Value>, name: &str, from: &str, mode: SlugMode) {
    let slug = match obj.get(name) {
        current if !is_truthy(current) => match obj.get(from) {
            Some(Value::String(source)) if !source.is_empty() => slugify_with(source, mode),
            _ => return,
        },
        Some(Value::String(explicit)) => normalize_explicit(explicit),
        _ => return,
    };
    obj.insert(name.to_string(), Value::String(slug));
}

/// Run the document-level hooks in declaration order.
pub fn run_collection_hooks(
    hooks: &[CollectionHook],
    obj: &mut Map<String, Value>,
    mode: SlugMode,
    now: DateTimeUtc,
) {
    for hook in hooks {
        match hook {
            CollectionHook::DeriveSlug { field, from } => {
                if is_truthy(obj.get(*field)) {
                    continue;
                }
                if let Some(Value::String(source)) = obj.get(*from)
                    && !source.is_empty()
                {
                    let slug = slugify_with(source, mode);
                    obj.insert(field.to_string(), Value::String(slug));
                }
            }
            CollectionHook::SumWhenSet { target, of } => {
                if !of.iter().all(|key| is_truthy(obj.get(*key))) {
                    continue;
                }
                let summands: Option<Vec<f64>> =
                    of.iter().map(|key| obj.get(*key).and_then(Value::as_f64)).collect();
                if let Some(summands) = summands {
                    obj.insert(target.to_string(), number(summands.iter().sum()));
                }
            }
            CollectionHook::StampOnStatus {
                target,
                status_field,
                status,
            } => {
                let matches = obj.get(*status_field).and_then(Value::as_str) == Some(*status);
                if matches && !is_truthy(obj.get(*target)) {
                    obj.insert(target.to_string(), Value::String(now.to_rfc3339()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(doc: Value) -> Map<String, Value> {
        match doc {
            Value::Object(obj) => obj,
            _ => panic!("fixture must be an object"),
        }
    }

    fn slug_fields() -> Vec<Field> {
        vec![
            Field::text("name"),
            Field::text("slug").hook(FieldHook::DeriveSlug { from: "name" }),
        ]
    }

    #[test]
    fn test_field_slug_derived_when_empty() {
        for empty in [json!({ "name": "Ana Yemek" }), json!({ "name": "Ana Yemek", "slug": "" })] {
            let mut obj = object(empty);
            run_field_hooks(&slug_fields(), &mut obj, SlugMode::Turkish);
            assert_eq!(obj["slug"], "ana-yemek");
        }
    }

    #[test]
    fn test_field_slug_explicit_is_normalized() {
        let mut obj = object(json!({ "name": "Ana Yemek", "slug": "  Özel-Slug " }));
        run_field_hooks(&slug_fields(), &mut obj, SlugMode::Turkish);
        assert_eq!(obj["slug"], "özel-slug");
    }

    #[test]
    fn test_field_slug_without_source() {
        let mut obj = object(json!({}));
        run_field_hooks(&slug_fields(), &mut obj, SlugMode::Turkish);
        assert!(obj.get("slug").is_none());
    }

    #[test]
    fn test_sum_treats_missing_as_zero() {
        let fields = vec![Field::row(vec![
            Field::number("prepTime"),
            Field::number("cookingTime"),
            Field::number("totalTime").hook(FieldHook::Sum {
                of: vec!["prepTime", "cookingTime"],
            }),
        ])];

        let mut obj = object(json!({ "prepTime": 15 }));
        run_field_hooks(&fields, &mut obj, SlugMode::Turkish);
        assert_eq!(obj["totalTime"], json!(15));

        let mut obj = object(json!({ "prepTime": 15, "cookingTime": "x" }));
        run_field_hooks(&fields, &mut obj, SlugMode::Turkish);
        assert_eq!(obj["totalTime"], json!(15));
    }

    #[test]
    fn test_hooks_reach_array_rows() {
        let fields = vec![Field::array(
            "steps",
            vec![
                Field::text("title"),
                Field::text("anchor").hook(FieldHook::DeriveSlug { from: "title" }),
            ],
        )];
        let mut obj = object(json!({ "steps": [{ "title": "Soğanı Kavur" }] }));
        run_field_hooks(&fields, &mut obj, SlugMode::Turkish);
        assert_eq!(obj["steps"][0]["anchor"], "sogani-kavur");
    }

    #[test]
    fn test_collection_slug_only_when_absent() {
        let hooks = [CollectionHook::DeriveSlug {
            field: "slug",
            from: "title",
        }];
        let now = DateTimeUtc::from_ymd(2025, 1, 1);

        let mut obj = object(json!({ "title": "İstanbul Usulü Pilav" }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["slug"], "istanbul-usulu-pilav");

        let mut obj = object(json!({ "title": "x", "slug": "kept" }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["slug"], "kept");
    }

    #[test]
    fn test_sum_when_set_needs_every_summand() {
        let hooks = [CollectionHook::SumWhenSet {
            target: "totalTime",
            of: vec!["prepTime", "cookingTime"],
        }];
        let now = DateTimeUtc::from_ymd(2025, 1, 1);

        let mut obj = object(json!({ "prepTime": 10, "cookingTime": 30, "totalTime": 10 }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["totalTime"], json!(40));

        let mut obj = object(json!({ "prepTime": 0, "cookingTime": 30, "totalTime": 30 }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["totalTime"], json!(30));
    }

    #[test]
    fn test_stamp_on_status() {
        let hooks = [CollectionHook::StampOnStatus {
            target: "publishedAt",
            status_field: "status",
            status: "published",
        }];
        let now = DateTimeUtc::new(2025, 3, 9, 8, 5, 0);

        let mut obj = object(json!({ "status": "published" }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["publishedAt"], "2025-03-09T08:05:00Z");

        let mut obj = object(json!({ "status": "published", "publishedAt": "2024-01-01" }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert_eq!(obj["publishedAt"], "2024-01-01");

        let mut obj = object(json!({ "status": "draft" }));
        run_collection_hooks(&hooks, &mut obj, SlugMode::Turkish, now);
        assert!(obj.get("publishedAt").is_none());
    }
}
