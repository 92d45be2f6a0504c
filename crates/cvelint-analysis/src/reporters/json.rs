//! JSON reporter.

use cvelint_core::errors::ReportError;
use serde::Serialize;

use super::Reporter;
use crate::engine::RunReport;
use crate::report::OrgSummary;

/// JSON reporter. The generation timestamp is fixed at construction.
pub struct JsonReporter {
    generated_at: String,
}

impl JsonReporter {
    pub fn new(generated_at: impl Into<String>) -> Self {
        Self {
            generated_at: generated_at.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: &'a str,
    files_collected: usize,
    files_checked: usize,
    results: Vec<JsonResult<'a>>,
    errors: Vec<JsonFileError<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    cve: &'a str,
    cna: &'a str,
    file: String,
    rule_name: &'a str,
    error_code: &'a str,
    error_path: &'a str,
    error_text: &'a str,
}

#[derive(Serialize)]
struct JsonFileError<'a> {
    file: String,
    kind: &'static str,
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary<'a> {
    generated_at: &'a str,
    results: Vec<JsonOrgSummary<'a>>,
}

#[derive(Serialize)]
struct JsonOrgSummary<'a> {
    cna: &'a str,
    errors: Vec<JsonRuleCount<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRuleCount<'a> {
    error_code: &'a str,
    error_name: &'a str,
    error_count: usize,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &RunReport) -> Result<String, ReportError> {
        let document = JsonReport {
            generated_at: &self.generated_at,
            files_collected: report.files_collected,
            files_checked: report.files_checked,
            results: report
                .findings
                .iter()
                .map(|f| JsonResult {
                    cve: f.record_id.as_str(),
                    cna: &f.organization,
                    file: f.file.display().to_string(),
                    rule_name: &f.rule_name,
                    error_code: &f.rule_code,
                    error_path: f.path.as_deref().unwrap_or(""),
                    error_text: &f.message,
                })
                .collect(),
            errors: report
                .file_errors
                .iter()
                .map(|e| JsonFileError {
                    file: e.file.display().to_string(),
                    kind: e.kind.name(),
                    message: &e.message,
                })
                .collect(),
        };
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }

    fn generate_summary(&self, summary: &[OrgSummary]) -> Result<String, ReportError> {
        let document = JsonSummary {
            generated_at: &self.generated_at,
            results: summary
                .iter()
                .map(|org| JsonOrgSummary {
                    cna: &org.organization,
                    errors: org
                        .rules
                        .iter()
                        .map(|rule| JsonRuleCount {
                            error_code: &rule.code,
                            error_name: &rule.name,
                            error_count: rule.count,
                        })
                        .collect(),
                })
                .collect(),
        };
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
