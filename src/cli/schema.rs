//! `sofra collections` and `sofra schema`.

use std::io::{Write, stdout};

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde_json::Value;

use crate::collections::{find, registry};
use crate::schema::CollectionConfig;

/// Table of collections: slug, admin group, data field count and flags.
pub fn list_collections() -> Result<()> {
    let mut out = stdout().lock();
    for collection in registry() {
        writeln!(
            out,
            "{:<22} {:<18} {:>3} fields{}",
            collection.slug.bold(),
            collection.admin.group.as_str(),
            collection.data_fields().len(),
            flags(collection).dimmed()
        )?;
    }
    Ok(())
}

fn flags(collection: &CollectionConfig) -> String {
    let mut flags = Vec::new();
    if collection.auth {
        flags.push("auth");
    }
    if collection.upload.is_some() {
        flags.push("upload");
    }
    if collection.drafts {
        flags.push("drafts");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", flags.join(", "))
    }
}

/// Print one declaration, or all of them as an array.
pub fn print_schema(collection: Option<&str>, pretty: bool) -> Result<()> {
    let json = schema_json(collection)?;
    let formatted = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{formatted}");
    Ok(())
}

fn schema_json(collection: Option<&str>) -> Result<Value> {
    Ok(match collection {
        Some(slug) => {
            let Some(config) = find(slug) else {
                let known: Vec<_> = registry().iter().map(|c| c.slug).collect();
                bail!("unknown collection `{slug}` (known: {})", known.join(", "));
            };
            serde_json::to_value(config)?
        }
        None => serde_json::to_value(registry())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_collection() {
        let json = schema_json(Some("recipes")).unwrap();
        assert_eq!(json["slug"], "recipes");
        assert_eq!(json["admin"]["useAsTitle"], "title");
        assert_eq!(json["admin"]["group"], "Content Management");
        assert_eq!(json["drafts"], true);
        assert_eq!(json["fields"][0]["type"], "tabs");
    }

    #[test]
    fn test_all_collections() {
        let json = schema_json(None).unwrap();
        let slugs: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs.len(), 16);
        assert_eq!(slugs[..4], ["users", "media", "categories", "recipes"]);
    }

    #[test]
    fn test_media_upload_settings() {
        let json = schema_json(Some("media")).unwrap();
        assert_eq!(json["upload"]["staticDir"], "media");
        assert_eq!(json["upload"]["imageSizes"][0]["name"], "large");
        assert_eq!(json["upload"]["imageSizes"][0]["width"], 1280);
    }

    #[test]
    fn test_unknown_collection() {
        let err = schema_json(Some("posts")).unwrap_err();
        assert!(err.to_string().contains("unknown collection `posts`"));
    }

    #[test]
    fn test_flags() {
        assert_eq!(flags(find("users").unwrap()), "  [auth]");
        assert_eq!(flags(find("recipes").unwrap()), "  [drafts]");
        assert_eq!(flags(find("seasons").unwrap()), "");
    }
}
