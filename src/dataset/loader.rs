//! Dataset discovery: `<collection-slug>/<id>.json` under a root directory.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;
use serde_json::Value;

use super::CheckReport;
use crate::collections::{find, registry};
use crate::debug;
use crate::schema::CollectionConfig;

/// One stored document.
#[derive(Debug, Clone)]
pub struct Document {
    pub collection: &'static CollectionConfig,
    /// File stem of the document file.
    pub id: String,
    pub path: PathBuf,
    pub data: Value,
}

impl Document {
    /// `collection/id`, the key findings are grouped under.
    pub fn label(&self) -> String {
        format!("{}/{}", self.collection.slug, self.id)
    }
}

/// Load every document below `dir`, in registry then id order.
///
/// Unreadable files, invalid JSON and unknown collection directories are
/// recorded in `report` and skipped.
pub fn load(dir: &Path, report: &mut CheckReport) -> Vec<Document> {
    let files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    let loaded: Vec<_> = files
        .par_iter()
        .map(|path| read_document(dir, path))
        .collect();

    let mut documents = Vec::with_capacity(loaded.len());
    for result in loaded {
        match result {
            Ok(document) => documents.push(document),
            Err((label, message)) => report.add(label, String::new(), message),
        }
    }

    documents.sort_by_cached_key(|doc| (position(doc.collection.slug), doc.id.clone()));
    debug!("check"; "loaded {} documents from {}", documents.len(), dir.display());
    documents
}

fn read_document(dir: &Path, path: &Path) -> Result<Document, (String, String)> {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    let label = relative.with_extension("").to_string_lossy().replace('\\', "/");

    let slug = relative
        .parent()
        .and_then(|p| p.to_str())
        .unwrap_or_default();
    let Some(collection) = find(slug) else {
        return Err((label, format!("unknown collection `{slug}`")));
    };
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = fs::read_to_string(path).map_err(|e| (label.clone(), e.to_string()))?;
    let data = serde_json::from_str(&content)
        .map_err(|e| (label.clone(), format!("invalid JSON: {e}")))?;

    Ok(Document {
        collection,
        id,
        path: path.to_path_buf(),
        data,
    })
}

fn position(slug: &str) -> usize {
    registry()
        .iter()
        .position(|c| c.slug == slug)
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, path: &str, content: &str) {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_orders_and_skips() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "recipes/b.json", "{}");
        write(dir.path(), "categories/z.json", "{}");
        write(dir.path(), "categories/a.json", "{}");
        write(dir.path(), "categories/notes.txt", "ignored");
        write(dir.path(), "README.json", "{}");
        write(dir.path(), "posts/x.json", "{}");
        write(dir.path(), "recipes/broken.json", "{");

        let mut report = CheckReport::default();
        let docs = load(dir.path(), &mut report);

        let labels: Vec<_> = docs.iter().map(Document::label).collect();
        assert_eq!(labels, ["categories/a", "categories/z", "recipes/b"]);

        assert_eq!(report.document_count(), 2);
        assert!(report.findings("posts/x").is_some());
        let broken = report.findings("recipes/broken").unwrap();
        assert!(broken[0].message.starts_with("invalid JSON"));
    }
}
