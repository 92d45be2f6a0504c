//! CVSS severity check.

use serde_json::Value;

use crate::record::{items, Record};
use crate::rules::types::Violation;

/// Qualitative severity for a CVSS v3/v4 base score.
///
/// Both versions share the same rating scale. Callers must pass a score in `[0, 10]`.
pub fn severity_for_score(score: f64) -> &'static str {
    if score == 0.0 {
        "none"
    } else if score <= 3.9 {
        "low"
    } else if score <= 6.9 {
        "medium"
    } else if score <= 8.9 {
        "high"
    } else {
        "critical"
    }
}

/// `cvssV3_1` → `3.1`, `cvssV4_0` → `4.0`.
fn metric_version(key: &str) -> String {
    key.trim_start_matches("cvssV").replace('_', ".")
}

/// E005: the recorded `baseSeverity` must match the `baseScore`.
pub fn check_cvss_base_severity(record: &Record) -> Vec<Violation> {
    let Some(cna) = record.cna() else {
        return Vec::new();
    };
    let mut violations = Vec::new();
    for (i, metric) in items(cna, "metrics") {
        let Some(metric) = metric.as_object() else {
            continue;
        };
        for (key, cvss) in metric {
            if !(key.starts_with("cvssV3") || key.starts_with("cvssV4")) {
                continue;
            }
            let Some(score) = cvss.get("baseScore").and_then(Value::as_f64) else {
                continue;
            };
            if !(0.0..=10.0).contains(&score) {
                continue;
            }
            let Some(recorded) = cvss.get("baseSeverity").and_then(Value::as_str) else {
                continue;
            };
            let recorded = recorded.to_lowercase();
            let expected = severity_for_score(score);
            if recorded != expected {
                violations.push(Violation::at(
                    format!(
                        "Incorrect CVSS v{} severity: \"{recorded}\" (should be \"{expected}\")",
                        metric_version(key)
                    ),
                    format!("containers.cna.metrics.{i}.{key}"),
                ));
            }
        }
    }
    violations
}
