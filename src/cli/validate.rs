//! `sofra validate`: run one document through its collection pipeline.

use std::fs;
use std::io::{Read, stdin};
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use serde_json::Value;

use super::ValidateArgs;
use crate::collections::find;
use crate::config::CmsConfig;
use crate::document::{Context, DocumentError, Operation, process};
use crate::media::probe_lenient;
use crate::{debug, log};

/// Print the processed document, or the error report and fail.
pub fn validate_document(args: &ValidateArgs, config: &CmsConfig) -> Result<()> {
    let Some(collection) = find(&args.collection) else {
        bail!("unknown collection `{}`", args.collection);
    };

    let doc = read_document(&args.file)?;
    let operation = if args.update {
        Operation::Update
    } else {
        Operation::Create
    };
    let upload = args.upload.as_deref().and_then(probe_lenient);
    let ctx = Context::from_config(config, operation).with_upload(upload);
    debug!("validate"; "{} as {:?}", args.file.display(), operation);

    match process(collection, doc, &ctx) {
        Ok(doc) => {
            println!("{}", to_json(&doc, args.pretty)?);
            log!("validate"; "{} document is valid", collection.slug);
            Ok(())
        }
        Err(DocumentError::Invalid(errors)) => {
            println!("{}", to_json(&serde_json::to_value(&errors)?, args.pretty)?);
            Err(DocumentError::Invalid(errors).into())
        }
        Err(err) => Err(err.into()),
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let content = if path.as_os_str() == "-" {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("Failed to read document from stdin")?;
        content
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read `{}`", path.display()))?
    };
    serde_json::from_str(&content)
        .with_context(|| format!("`{}` is not valid JSON", path.display()))
}

fn to_json(value: &Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(dir: &TempDir, collection: &str, content: &str) -> ValidateArgs {
        let file = dir.path().join("doc.json");
        fs::write(&file, content).unwrap();
        ValidateArgs {
            collection: collection.to_string(),
            file,
            update: false,
            pretty: false,
            upload: None,
        }
    }

    #[test]
    fn test_valid_document() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "categories", r#"{ "name": "Ana Yemek" }"#);
        assert!(validate_document(&args, &CmsConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_document_fails() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "categories", r#"{ "name": "" }"#);
        let err = validate_document(&args, &CmsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_upload_is_checked_against_ratio() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("square.png");
        image::RgbImage::new(100, 100).save(&image).unwrap();

        let mut args = args(&dir, "media", r#"{ "aspectRatio": "16x9" }"#);
        args.upload = Some(image);
        let err = validate_document(&args, &CmsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("aspectRatio"));
    }

    #[test]
    fn test_unknown_collection_and_bad_json() {
        let dir = TempDir::new().unwrap();
        let unknown = args(&dir, "posts", "{}");
        assert!(validate_document(&unknown, &CmsConfig::default()).is_err());

        let broken = args(&dir, "categories", "{");
        let err = validate_document(&broken, &CmsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));

        let missing = ValidateArgs {
            file: PathBuf::from("/nonexistent/doc.json"),
            ..broken
        };
        assert!(validate_document(&missing, &CmsConfig::default()).is_err());
    }
}
