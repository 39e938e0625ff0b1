//! Dataset check report.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::{plural_count, plural_s};

/// One problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Dotted field path; empty for whole-document problems.
    pub path: String,
    pub message: String,
}

/// Read access summary of one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readable {
    /// Documents anonymous readers can see.
    pub public: usize,
    pub total: usize,
}

/// Findings grouped by document label (`collection/id`).
#[derive(Debug, Default)]
pub struct CheckReport {
    documents: BTreeMap<String, Vec<Finding>>,
    /// Documents that went through the pipeline.
    pub checked: usize,
    pub readable: BTreeMap<&'static str, Readable>,
}

impl CheckReport {
    pub fn add(&mut self, document: String, path: String, message: String) {
        self.documents
            .entry(document)
            .or_default()
            .push(Finding { path, message });
    }

    pub fn findings(&self, document: &str) -> Option<&[Finding]> {
        self.documents.get(document).map(Vec::as_slice)
    }

    /// Count of documents with findings.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Total finding count.
    pub fn error_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.documents.is_empty()
    }

    /// Print every finding to stderr, one block per document.
    pub fn print(&self) {
        for (document, findings) in &self.documents {
            eprintln!("{}{}{}", "[".dimmed(), document.cyan(), "]".dimmed());
            for finding in findings {
                if finding.path.is_empty() {
                    eprintln!("{} {}", "→".red(), finding.message);
                } else {
                    eprintln!("{} {} {}", "→".red(), finding.path, finding.message.dimmed());
                }
            }
        }
    }

    /// Print per-collection read access, e.g. `recipes: 3/5 public`.
    pub fn print_access(&self) {
        for (collection, readable) in &self.readable {
            eprintln!(
                "{} {}/{} public",
                format!("{collection}:").dimmed(),
                readable.public,
                readable.total
            );
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        let checked = plural_count(self.checked, "document");

        if total == 0 {
            write!(f, "{} {}", checked, "passed".green())
        } else {
            let documents = self.document_count();
            write!(
                f,
                "{} {} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed(),
                format!("in {} of {checked}", documents).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = CheckReport {
            checked: 3,
            ..CheckReport::default()
        };
        assert!(report.is_clean());

        report.add("recipes/a".into(), "slug".into(), "dup".into());
        report.add("recipes/a".into(), "title".into(), "bad".into());
        report.add("categories/b".into(), String::new(), "invalid JSON".into());

        assert_eq!(report.document_count(), 2);
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.findings("recipes/a").unwrap()[1].path, "title");
    }

    #[test]
    fn test_summary() {
        let mut report = CheckReport {
            checked: 2,
            ..CheckReport::default()
        };
        let clean = report.to_string();
        assert!(clean.starts_with("2 documents "));
        assert!(clean.contains("passed"));

        report.add("recipes/a".into(), "slug".into(), "dup".into());
        let failed = report.to_string();
        assert!(failed.contains("in 1 of 2 documents"));
        assert!(!failed.contains("passed"));
    }
}
