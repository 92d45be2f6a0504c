//! cvelint-analysis: record model, rule catalogue, validation engine,
//! report views, reporters and file scanning.

pub mod engine;
pub mod record;
pub mod report;
pub mod reporters;
pub mod rules;
pub mod scanner;

pub use engine::{lint, FileError, Finding, LintEngine, RunReport};
pub use record::{Record, RecordState};
pub use report::OrgSummary;
pub use reporters::{create_reporter, OutputFormat, ReportOptions, Reporter};
pub use rules::{RuleCatalogue, RuleDescriptor, Violation};
