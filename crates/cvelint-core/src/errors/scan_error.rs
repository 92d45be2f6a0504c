//! File enumeration errors.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

/// Errors that can occur while collecting record files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("\"{path}\" is not a {extension} file")]
    NotJson { path: PathBuf, extension: String },

    #[error("No CVE record JSON files found under {path}")]
    NoRecordsFound { path: PathBuf },
}

impl LintErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRecordsFound { .. } => error_code::NO_RECORDS,
            _ => error_code::SCAN_ERROR,
        }
    }
}
