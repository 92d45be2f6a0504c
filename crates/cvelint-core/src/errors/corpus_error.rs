//! Corpus cache errors.

use std::path::PathBuf;

use super::error_code::{self, LintErrorCode};

/// Errors that can occur while materializing the cached record corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Unable to determine a cache directory: {0}")]
    CacheDir(String),

    #[error("Failed to {operation} repository at {path}: {message}")]
    Git {
        operation: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LintErrorCode for CorpusError {
    fn error_code(&self) -> &'static str {
        error_code::CORPUS_ERROR
    }
}
