//! Final ordering of engine output.
//!
//! Findings arrive from workers in arbitrary order. Each carries the index
//! of its rule in the evaluation order and its index within that rule's
//! output, which together with the record key make the order total.

use std::cmp::Ordering;

use super::types::{FileError, Finding};

/// A finding as sent through the aggregation channel.
#[derive(Debug, Clone)]
pub(crate) struct SequencedFinding {
    pub rule_ordinal: usize,
    pub emit_ordinal: usize,
    pub finding: Finding,
}

/// Most recent record first; within a record, rule then emission order.
pub(crate) fn compare(a: &SequencedFinding, b: &SequencedFinding) -> Ordering {
    a.finding
        .record_id
        .cmp_recent_first(&b.finding.record_id)
        .then_with(|| a.finding.file.cmp(&b.finding.file))
        .then_with(|| a.rule_ordinal.cmp(&b.rule_ordinal))
        .then_with(|| a.emit_ordinal.cmp(&b.emit_ordinal))
}

pub(crate) fn order_findings(mut findings: Vec<SequencedFinding>) -> Vec<Finding> {
    findings.sort_by(compare);
    findings.into_iter().map(|f| f.finding).collect()
}

pub(crate) fn order_file_errors(mut errors: Vec<FileError>) -> Vec<FileError> {
    errors.sort_by(|a, b| a.file.cmp(&b.file));
    errors
}
