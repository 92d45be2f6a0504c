//! Reporters: output formats for run reports and summaries.
//!
//! 3 formats: human-readable text, JSON, CSV.

pub mod csv;
pub mod json;
pub mod text;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use cvelint_core::constants::OUTPUT_FORMATS;
use cvelint_core::errors::ReportError;

use crate::engine::RunReport;
use crate::report::OrgSummary;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &RunReport) -> Result<String, ReportError>;
    fn generate_summary(&self, summary: &[OrgSummary]) -> Result<String, ReportError>;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering settings that are not part of the report itself.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub color: bool,
    pub generated_at: DateTime<Utc>,
}

impl ReportOptions {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            generated_at: Utc::now(),
        }
    }

    /// RFC 3339 timestamp in UTC, second precision.
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Create a reporter for `format`.
pub fn create_reporter(format: OutputFormat, options: &ReportOptions) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(text::TextReporter::new(options.color)),
        OutputFormat::Json => Box::new(json::JsonReporter::new(options.timestamp())),
        OutputFormat::Csv => Box::new(csv::CsvReporter),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &OUTPUT_FORMATS
}
