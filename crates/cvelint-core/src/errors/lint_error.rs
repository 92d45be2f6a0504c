//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::LintErrorCode;
use super::{ConfigError, CorpusError, EngineError, ReportError, ScanError, SelectionError};

/// Any error that aborts a lint invocation before or around the run.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Rule selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl LintErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::Selection(e) => e.error_code(),
            Self::Engine(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
