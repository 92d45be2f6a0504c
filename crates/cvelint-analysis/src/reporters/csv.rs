//! CSV reporter (RFC 4180 quoting). Produces no output at all when there are no rows.

use std::fmt::Write;

use cvelint_core::errors::ReportError;

use super::Reporter;
use crate::engine::RunReport;
use crate::report::OrgSummary;

const RESULTS_HEADER: &str = "CVE,CNA,File,RuleName,RuleCode,ErrorPath,ErrorText";
const SUMMARY_HEADER: &str = "CNA,ErrorCode,ErrorName,ErrorCount";

/// CSV reporter.
pub struct CsvReporter;

/// Quote a field when it contains a separator, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row(output: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
    let _ = write!(output, "{}\r\n", row.join(","));
}

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, report: &RunReport) -> Result<String, ReportError> {
        let mut output = String::new();
        if report.findings.is_empty() {
            return Ok(output);
        }
        let _ = write!(output, "{RESULTS_HEADER}\r\n");
        for f in &report.findings {
            let file = f.file.display().to_string();
            push_row(
                &mut output,
                &[
                    f.record_id.as_str(),
                    &f.organization,
                    &file,
                    &f.rule_name,
                    &f.rule_code,
                    f.path.as_deref().unwrap_or(""),
                    &f.message,
                ],
            );
        }
        Ok(output)
    }

    fn generate_summary(&self, summary: &[OrgSummary]) -> Result<String, ReportError> {
        let mut output = String::new();
        if summary.iter().all(|org| org.rules.is_empty()) {
            return Ok(output);
        }
        let _ = write!(output, "{SUMMARY_HEADER}\r\n");
        for org in summary {
            for rule in &org.rules {
                let count = rule.count.to_string();
                push_row(&mut output, &[&org.organization, &rule.code, &rule.name, &count]);
            }
        }
        Ok(output)
    }
}
