//! Report rendering errors.

use super::error_code::{self, LintErrorCode};

/// Errors that can occur while rendering a run report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Invalid output format \"{0}\", must be one of: text, json, csv")]
    UnsupportedFormat(String),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LintErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => error_code::UNSUPPORTED_FORMAT,
            Self::Serialization(_) => error_code::REPORT_ERROR,
        }
    }
}
