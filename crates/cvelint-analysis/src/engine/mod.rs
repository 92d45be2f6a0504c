//! Validation engine: concurrent per-file checking and ordered aggregation.

pub mod linter;
mod ordering;
pub mod types;

use std::path::{Path, PathBuf};

use cvelint_core::config::LintConfig;
use cvelint_core::LintError;
use tracing::info;

use crate::rules::RuleCatalogue;
use crate::scanner::{collect_record_files, CorpusCache};

pub use linter::LintEngine;
pub use types::{FileError, FileErrorKind, FileOutcome, Finding, RunReport, SkipReason};

/// Lint `target` (a record file or a directory of records) with the rules
/// `config` selects from `catalogue`.
///
/// Without a target the cached cvelistV5 checkout is materialized and linted.
/// Rule selection errors are returned before the corpus is touched or any
/// file is read.
pub fn lint(
    target: Option<&Path>,
    catalogue: &RuleCatalogue,
    config: &LintConfig,
    organization: Option<&str>,
) -> Result<RunReport, LintError> {
    let selected = catalogue.select(&config.rules.select, &config.rules.ignore)?;

    let target: PathBuf = match target {
        Some(target) => target.to_path_buf(),
        None => CorpusCache::from_config(&config.cache)?.materialize()?,
    };
    let files = collect_record_files(&target, config.scan.effective_extension())?;
    info!(target = %target.display(), files = files.len(), "collected record files");

    let report = LintEngine::new(selected)
        .with_organization(organization.map(str::to_string))
        .with_scan_config(&config.scan)
        .run(&files)?;
    Ok(report)
}
