//! Rule selection errors.

use super::error_code::{self, LintErrorCode};

/// Errors raised while resolving the requested rule subset.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown rule selected: {code}")]
    UnknownRule { code: String },
}

impl LintErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_SELECTION_ERROR
    }
}
