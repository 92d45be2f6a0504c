//! Text reporter: human-readable terminal output with color codes.

use std::fmt::Write;

use cvelint_core::errors::ReportError;

use super::Reporter;
use crate::engine::RunReport;
use crate::report::OrgSummary;

const BOLD_UNDERLINE: &str = "\x1b[1;4m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Text reporter for terminal output.
pub struct TextReporter {
    pub use_color: bool,
}

impl TextReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &RunReport) -> Result<String, ReportError> {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Collected {}; checked {}.",
            plural(report.files_collected, "file"),
            plural(report.files_checked, "file")
        );

        if !report.file_errors.is_empty() {
            output.push('\n');
            for error in &report.file_errors {
                let _ = writeln!(output, "ERROR: {error}");
            }
        }

        for group in report.groups() {
            let _ = writeln!(
                output,
                "\n{} ({}) -- {}",
                self.styled(BOLD_UNDERLINE, group.record_id.as_str()),
                group.organization,
                group.file.display()
            );
            for finding in group.findings {
                let _ = write!(
                    output,
                    "  {}  {}",
                    self.styled(RED, &finding.rule_code),
                    finding.message
                );
                match finding.path {
                    Some(ref path) => {
                        let _ = writeln!(output, " (at \"{path}\")");
                    }
                    None => output.push('\n'),
                }
            }
        }

        let _ = writeln!(output, "\nFound {}.", plural(report.problem_count(), "error"));
        Ok(output)
    }

    fn generate_summary(&self, summary: &[OrgSummary]) -> Result<String, ReportError> {
        let width = summary
            .iter()
            .flat_map(|org| org.rules.iter())
            .map(|rule| rule.name.len())
            .max()
            .unwrap_or(0)
            + 2;

        let mut output = String::new();
        for org in summary {
            let _ = writeln!(output, "{}", self.styled(BOLD_UNDERLINE, &org.organization));
            for rule in &org.rules {
                let _ = writeln!(
                    output,
                    "  {} {:<width$}{}",
                    self.styled(RED, &rule.code),
                    rule.name,
                    rule.count
                );
            }
            output.push('\n');
        }
        Ok(output)
    }
}
