//! Document pipeline: defaults, before-validate hooks and validation.
//!
//! # Pipeline
//!
//! ```text
//! JSON object
//!     │
//!     ├── 1. defaults          defaultValue for absent keys (create only)
//!     ├── 2. field hooks       slug from title, totalTime sum
//!     ├── 3. collection hooks  slug fallback, totalTime, publishedAt stamp
//!     └── 4. validation        every field, all errors collected
//!             │
//!             ▼
//!     processed document | ValidationErrors
//! ```

mod defaults;
mod error;
mod hooks;
mod rules;
mod validate;
mod value;

pub use error::{DocumentError, ValidationError, ValidationErrors};

use serde_json::Value;

use crate::config::{CmsConfig, SlugMode};
use crate::locale::Locale;
use crate::media::{AspectRatioValidator, Dimensions};
use crate::schema::CollectionConfig;
use crate::utils::date::DateTimeUtc;
use validate::Validation;

/// Whether the document is new or replaces a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// Everything the pipeline needs besides the document itself.
#[derive(Debug, Clone)]
pub struct Context {
    pub operation: Operation,
    pub locale: Locale,
    pub slug_mode: SlugMode,
    pub validator: AspectRatioValidator,
    /// Size of the file uploaded with this request, if any.
    pub upload: Option<Dimensions>,
    /// Timestamp used by `publishedAt` stamping.
    pub now: DateTimeUtc,
}

impl Context {
    /// Context with built-in defaults.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            locale: Locale::default(),
            slug_mode: SlugMode::default(),
            validator: AspectRatioValidator::new(),
            upload: None,
            now: DateTimeUtc::now(),
        }
    }

    /// Context following the loaded configuration.
    pub fn from_config(config: &CmsConfig, operation: Operation) -> Self {
        Self {
            locale: config.locale,
            slug_mode: config.slug.transliterate,
            validator: config.media.validator(),
            ..Self::new(operation)
        }
    }

    pub fn with_upload(mut self, upload: Option<Dimensions>) -> Self {
        self.upload = upload;
        self
    }
}

/// Run a document through its collection's pipeline.
///
/// Returns the document as it would be stored, or every validation error.
pub fn process(
    collection: &CollectionConfig,
    doc: Value,
    ctx: &Context,
) -> Result<Value, DocumentError> {
    let Value::Object(mut obj) = doc else {
        return Err(DocumentError::NotObject);
    };

    if ctx.operation == Operation::Create {
        defaults::apply(&collection.fields, &mut obj);
    }
    hooks::run_field_hooks(&collection.fields, &mut obj, ctx.slug_mode);
    hooks::run_collection_hooks(&collection.hooks, &mut obj, ctx.slug_mode, ctx.now);

    let mut validation = Validation::new(ctx);
    validation.fields(&collection.fields, &obj, "");
    let errors = validation.finish();

    if errors.is_empty() {
        Ok(Value::Object(obj))
    } else {
        Err(DocumentError::Invalid(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{find, recipes};
    use serde_json::json;

    fn ctx() -> Context {
        Context {
            now: DateTimeUtc::new(2025, 5, 1, 12, 0, 0),
            ..Context::new(Operation::Create)
        }
    }

    fn errors(collection: &str, doc: Value) -> ValidationErrors {
        let collection = find(collection).unwrap();
        match process(collection, doc, &ctx()) {
            Err(DocumentError::Invalid(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_recipe_sample_passes() {
        let doc = process(find("recipes").unwrap(), recipes::sample(), &ctx()).unwrap();

        assert_eq!(doc["slug"], "klasik-mercimek-corbasi");
        assert_eq!(doc["totalTime"], json!(40));
        assert_eq!(doc["servings"], json!(4));
        assert_eq!(doc["status"], "draft");
        assert_eq!(doc["featured"], json!(false));
        assert!(doc.get("publishedAt").is_none());
    }

    #[test]
    fn test_recipe_publish_stamps_date() {
        let mut sample = recipes::sample();
        sample["status"] = json!("published");
        let doc = process(find("recipes").unwrap(), sample, &ctx()).unwrap();
        assert_eq!(doc["publishedAt"], "2025-05-01T12:00:00Z");
    }

    #[test]
    fn test_recipe_total_time_with_missing_cooking_time() {
        let mut sample = recipes::sample();
        sample["cookingTime"] = json!(null);
        let errors = errors("recipes", sample);
        // the field hook summed 10 + 0; only the required error remains
        assert_eq!(errors.len(), 1);
        assert!(errors.get("cookingTime").is_some());
    }

    #[test]
    fn test_recipe_reports_every_error() {
        let mut sample = recipes::sample();
        sample["title"] = json!("Tavuk  Sote");
        sample["servings"] = json!(0);
        sample["videoUrl"] = json!("not a url");
        sample["ingredients"][0]["amount"] = json!(null);
        sample["instructions"] = json!([]);

        let errors = errors("recipes", sample);
        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "title",
                "videoUrl",
                "servings",
                "ingredients.0.amount",
                "instructions"
            ]
        );
        assert_eq!(
            errors.get("title"),
            Some("Tarif adı ardışık boşluklar içeremez.")
        );
    }

    #[test]
    fn test_explicit_slug_is_normalized() {
        let mut sample = recipes::sample();
        sample["slug"] = json!("  Mercimek-Corbasi ");
        let doc = process(find("recipes").unwrap(), sample, &ctx()).unwrap();
        assert_eq!(doc["slug"], "mercimek-corbasi");
    }

    #[test]
    fn test_update_skips_defaults() {
        let update = Context {
            operation: Operation::Update,
            ..ctx()
        };
        let doc = process(find("recipes").unwrap(), recipes::sample(), &update);
        let errors = doc.unwrap_err();
        // status is required and has no default on update
        assert!(errors.errors().unwrap().get("status").is_some());
    }

    #[test]
    fn test_category() {
        let doc = process(
            find("categories").unwrap(),
            json!({ "name": "Ana Yemek" }),
            &ctx(),
        )
        .unwrap();
        assert_eq!(doc["slug"], "ana-yemek");
        assert_eq!(doc["isActive"], json!(true));

        let errors = errors("categories", json!({ "name": "   " }));
        assert_eq!(errors.get("name"), Some("Kategori adı sadece boşluk olamaz."));
    }

    #[test]
    fn test_unicode_slug_mode() {
        let ctx = Context {
            slug_mode: SlugMode::Unicode,
            ..ctx()
        };
        let doc = process(
            find("cuisines").unwrap(),
            json!({ "name": "Crème Brûlée", "primaryLocation": { "type": "country" } }),
            &ctx,
        )
        .unwrap();
        assert_eq!(doc["slug"], "creme-brulee");
    }

    #[test]
    fn test_media_aspect_ratio() {
        let media = find("media").unwrap();
        let doc = json!({ "aspectRatio": "16x9", "filename": "a.png" });

        let ok = ctx().with_upload(Some(Dimensions::new(1920, 1080)));
        assert!(process(media, doc.clone(), &ok).is_ok());

        let bad = ctx().with_upload(Some(Dimensions::new(1000, 1000)));
        let err = process(media, doc, &bad).unwrap_err();
        let message = err.errors().unwrap().get("aspectRatio").unwrap();
        assert!(message.starts_with("Aspect Ratio Hatası: 16:9 Yatay"));

        let errors = errors("media", json!({ "filename": "a.png" }));
        assert_eq!(errors.get("aspectRatio"), Some("Aspect ratio seçimi zorunludur."));
    }

    #[test]
    fn test_stored_media_without_upload_is_not_remeasured() {
        let stored = json!({
            "aspectRatio": "16x9",
            "filename": "a.png",
            "width": 1000,
            "height": 1000
        });
        let update = Context {
            operation: Operation::Update,
            ..ctx()
        };
        assert!(process(find("media").unwrap(), stored, &update).is_ok());
    }

    #[test]
    fn test_rejects_non_objects() {
        let result = process(find("recipes").unwrap(), json!([1, 2]), &ctx());
        assert!(matches!(result, Err(DocumentError::NotObject)));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let doc = process(
            find("categories").unwrap(),
            json!({ "name": "Tatlı", "legacyId": 12 }),
            &ctx(),
        )
        .unwrap();
        assert_eq!(doc["legacyId"], json!(12));
    }

    #[test]
    fn test_english_messages() {
        let ctx = Context {
            locale: Locale::En,
            ..ctx()
        };
        let err = process(find("categories").unwrap(), json!({}), &ctx).unwrap_err();
        assert_eq!(
            err.errors().unwrap().get("name"),
            Some("Category name must be text.")
        );

        let err = process(find("recipes").unwrap(), json!({}), &ctx).unwrap_err();
        assert_eq!(
            err.errors().unwrap().get("category"),
            Some("This field is required.")
        );
    }
}
