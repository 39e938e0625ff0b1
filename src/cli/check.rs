//! `sofra check`: dataset checks.

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::{CmsConfig, ValidateLevel};
use crate::dataset;
use crate::document::{Context, Operation};
use crate::log;
use crate::logger::is_verbose;
use crate::utils::plural_count;

/// Check every document under `dir` and print the report.
///
/// Findings fail the command unless `warn_only` is set or
/// `[validate] level = "warn"`.
pub fn check_dataset(dir: &Path, warn_only: bool, config: &CmsConfig) -> Result<()> {
    if !dir.is_dir() {
        bail!("dataset directory `{}` not found", dir.display());
    }

    let ctx = Context::from_config(config, Operation::Create);
    let report = dataset::check(dir, &ctx, &config.validate);

    report.print();
    if is_verbose() {
        report.print_access();
    }
    log!("check"; "{report}");

    let warn = warn_only || config.validate.level == ValidateLevel::Warn;
    if !report.is_clean() && !warn {
        bail!(
            "found {} in {}",
            plural_count(report.error_count(), "error"),
            plural_count(report.document_count(), "document")
        );
    }
    Ok(())
}
