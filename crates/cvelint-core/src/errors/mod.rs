//! Error handling for cvelint.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod corpus_error;
pub mod engine_error;
pub mod error_code;
pub mod lint_error;
pub mod report_error;
pub mod scan_error;
pub mod selection_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use engine_error::EngineError;
pub use error_code::LintErrorCode;
pub use lint_error::LintError;
pub use report_error::ReportError;
pub use scan_error::ScanError;
pub use selection_error::SelectionError;
