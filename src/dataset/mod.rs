//! Dataset checks.
//!
//! A dataset directory holds one JSON file per document, grouped by
//! collection:
//!
//! ```text
//! data/
//! ├── categories/
//! │   └── ana-yemek.json
//! └── recipes/
//!     └── mercimek.json
//! ```
//!
//! Documents are processed in parallel; the unique and reference checks run
//! afterwards over the merged results.

mod index;
mod loader;
mod report;

pub use index::{Reference, references, unique_values};
pub use loader::{Document, load};
pub use report::{CheckReport, Finding, Readable};

use std::path::Path;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Map, Value};

use crate::config::ValidateConfig;
use crate::document::{Context, DocumentError, process};
use crate::locale::Message;
use crate::log;
use crate::utils::plural_count;

/// Run every check over the dataset in `dir`.
pub fn check(dir: &Path, ctx: &Context, settings: &ValidateConfig) -> CheckReport {
    let mut report = CheckReport::default();
    let documents = load(dir, &mut report);
    log!("check"; "validating {}", plural_count(documents.len(), "document"));

    let processed: Vec<Result<Value, DocumentError>> = documents
        .par_iter()
        .map(|doc| process(doc.collection, doc.data.clone(), ctx))
        .collect();

    // Invalid documents are still indexed as stored.
    let mut stored: Vec<Map<String, Value>> = Vec::with_capacity(documents.len());
    for (doc, result) in documents.iter().zip(processed) {
        let data = match result {
            Ok(data) => data,
            Err(DocumentError::NotObject) => {
                report.add(doc.label(), String::new(), DocumentError::NotObject.to_string());
                Value::Object(Map::new())
            }
            Err(DocumentError::Invalid(errors)) => {
                for error in errors.errors {
                    report.add(doc.label(), error.path, error.message);
                }
                doc.data.clone()
            }
        };
        stored.push(match data {
            Value::Object(obj) => obj,
            _ => Map::new(),
        });
    }
    report.checked = documents.len();

    if settings.unique {
        check_unique(&documents, &stored, ctx, &mut report);
    }
    if settings.references {
        check_references(&documents, &stored, ctx, &mut report);
    }
    count_readable(&documents, &stored, &mut report);

    report
}

/// Documents of one collection sharing a value of a unique field.
fn check_unique(
    documents: &[Document],
    stored: &[Map<String, Value>],
    ctx: &Context,
    report: &mut CheckReport,
) {
    let mut seen: FxHashMap<(&str, &str, String), Vec<usize>> = FxHashMap::default();
    for (i, (doc, obj)) in documents.iter().zip(stored).enumerate() {
        for (field, value) in unique_values(doc.collection, obj) {
            seen.entry((doc.collection.slug, field, value))
                .or_default()
                .push(i);
        }
    }

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, docs)| docs.len() > 1).collect();
    duplicates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.1.cmp(b.0.1)));

    for ((_, field, value), owners) in duplicates {
        for &owner in &owners {
            let others: Vec<_> = owners
                .iter()
                .filter(|&&other| other != owner)
                .map(|&other| documents[other].label())
                .collect();
            let message = Message::Duplicate {
                value: value.clone(),
                other: others.join(", "),
            };
            report.add(
                documents[owner].label(),
                field.to_string(),
                message.render(ctx.locale),
            );
        }
    }
}

/// Relationship and upload ids with no document in the target collection.
fn check_references(
    documents: &[Document],
    stored: &[Map<String, Value>],
    ctx: &Context,
    report: &mut CheckReport,
) {
    let ids: FxHashSet<(&str, &str)> = documents
        .iter()
        .map(|doc| (doc.collection.slug, doc.id.as_str()))
        .collect();

    for (doc, obj) in documents.iter().zip(stored) {
        let mut refs = Vec::new();
        references(&doc.collection.fields, obj, "", &mut refs);
        for reference in refs {
            if ids.contains(&(reference.target, reference.id.as_str())) {
                continue;
            }
            let message = Message::DanglingReference {
                collection: reference.target.to_string(),
                id: reference.id,
            };
            report.add(doc.label(), reference.path, message.render(ctx.locale));
        }
    }
}

fn count_readable(documents: &[Document], stored: &[Map<String, Value>], report: &mut CheckReport) {
    for (doc, obj) in documents.iter().zip(stored) {
        let entry = report.readable.entry(doc.collection.slug).or_default();
        entry.total += 1;
        // access rules only look at top-level keys
        if doc.collection.access.allows(&Value::Object(obj.clone()), false) {
            entry.public += 1;
        }
    }
}
