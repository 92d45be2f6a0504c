//! LintErrorCode trait: stable machine-readable codes for every error enum.

/// Every error enum implements this to expose a structured error code
/// alongside its human-readable message.
pub trait LintErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const NO_RECORDS: &str = "NO_RECORDS";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const RULE_SELECTION_ERROR: &str = "RULE_SELECTION_ERROR";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
