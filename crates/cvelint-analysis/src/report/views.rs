//! Grouped listing and per-organization summary.
//!
//! Views borrow from the report and never mutate it.

use std::collections::BTreeMap;
use std::path::Path;

use cvelint_core::RecordId;
use serde::Serialize;

use crate::engine::{Finding, RunReport};

/// All findings of one record file, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup<'a> {
    pub record_id: &'a RecordId,
    pub organization: &'a str,
    pub file: &'a Path,
    pub findings: &'a [Finding],
}

/// Occurrences of one rule within one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub code: String,
    pub name: String,
    pub count: usize,
}

/// Per-rule occurrence counts for one organization, in code order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgSummary {
    pub organization: String,
    pub rules: Vec<RuleCount>,
}

impl OrgSummary {
    pub fn total(&self) -> usize {
        self.rules.iter().map(|r| r.count).sum()
    }
}

impl RunReport {
    /// Findings grouped per (record, file), in report order.
    pub fn groups(&self) -> Vec<RecordGroup<'_>> {
        self.findings
            .chunk_by(|a, b| a.record_id == b.record_id && a.file == b.file)
            .filter_map(|chunk| {
                let first = chunk.first()?;
                Some(RecordGroup {
                    record_id: &first.record_id,
                    organization: &first.organization,
                    file: &first.file,
                    findings: chunk,
                })
            })
            .collect()
    }

    /// Counts per organization and rule code, sorted by organization then code.
    pub fn summary(&self) -> Vec<OrgSummary> {
        let mut counts: BTreeMap<&str, BTreeMap<&str, (&str, usize)>> = BTreeMap::new();
        for finding in &self.findings {
            let entry = counts
                .entry(finding.organization.as_str())
                .or_default()
                .entry(finding.rule_code.as_str())
                .or_insert((finding.rule_name.as_str(), 0));
            entry.1 += 1;
        }
        counts
            .into_iter()
            .map(|(organization, rules)| OrgSummary {
                organization: organization.to_string(),
                rules: rules
                    .into_iter()
                    .map(|(code, (name, count))| RuleCount {
                        code: code.to_string(),
                        name: name.to_string(),
                        count,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Any finding or file error.
    pub fn has_problems(&self) -> bool {
        !self.findings.is_empty() || !self.file_errors.is_empty()
    }

    /// Findings plus file errors.
    pub fn problem_count(&self) -> usize {
        self.findings.len() + self.file_errors.len()
    }
}
