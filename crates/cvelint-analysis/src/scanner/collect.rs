//! Record file enumeration.
//!
//! A file target is taken as-is (after an extension check). A directory is
//! walked recursively with the `ignore` crate with its standard filters off,
//! so hidden and git-ignored record files are still collected. `.git`
//! directories are pruned.

use std::path::{Path, PathBuf};

use cvelint_core::errors::ScanError;
use ignore::WalkBuilder;
use tracing::{debug, warn};

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Collect record files under `target`, sorted by path.
pub fn collect_files(target: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = std::fs::metadata(target).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScanError::NotFound {
                path: target.to_path_buf(),
            }
        } else {
            ScanError::IoError {
                path: target.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        if !has_extension(target, extension) {
            return Err(ScanError::NotJson {
                path: target.to_path_buf(),
                extension: extension.to_string(),
            });
        }
        return Ok(vec![target.to_path_buf()]);
    }

    let walker = WalkBuilder::new(target)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if is_file && has_extension(entry.path(), extension) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "skipping unreadable directory entry"),
        }
    }
    files.sort();
    debug!(target = %target.display(), files = files.len(), "collected record files");
    Ok(files)
}

/// Like [`collect_files`], but an empty result is an error.
pub fn collect_record_files(target: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let files = collect_files(target, extension)?;
    if files.is_empty() {
        return Err(ScanError::NoRecordsFound {
            path: target.to_path_buf(),
        });
    }
    Ok(files)
}
