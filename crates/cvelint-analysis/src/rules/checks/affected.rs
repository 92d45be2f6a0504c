//! Affected-product checks: status presence, version strings, vendor and product names.

use std::str::FromStr;
use std::sync::LazyLock;

use packageurl::PackageUrl;
use regex::Regex;
use serde_json::Value;

use crate::record::{items, str_field, Record};
use crate::rules::types::Violation;

/// Versions: `*` or an alphanumeric start followed by `-*_:.` and alphanumerics.
static VALID_VERSION_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\*|[a-zA-Z0-9]+[-*_:.a-zA-Z0-9]*)$").ok());

/// Placeholder names: `n/a`, a lone punctuation character, or a bare URL.
static INVALID_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([[:punct:]]|(?i:n/a)|https?://.*)$").ok());

const VERSION_FIELDS: [&str; 3] = ["version", "lessThan", "lessThanOrEqual"];

/// `true` when `version` is an acceptable version token or package URL.
pub fn is_valid_version(version: &str) -> bool {
    if version.starts_with("pkg:") {
        return PackageUrl::from_str(version).is_ok();
    }
    VALID_VERSION_RE.as_ref().is_some_and(|re| re.is_match(version))
}

/// `true` when `name` is a placeholder rather than a real vendor or product.
pub fn is_invalid_name(name: &str) -> bool {
    INVALID_NAME_RE.as_ref().is_some_and(|re| re.is_match(name))
}

fn affected(record: &Record) -> Option<&Value> {
    if !record.is_published() {
        return None;
    }
    record.cna()
}

fn is_affected_status(status: Option<&str>) -> bool {
    matches!(status, Some("affected" | "unknown"))
}

/// E006: at least one product must be affected or of unknown status. A
/// published record without a CNA container has none.
pub fn check_affected_product_present(record: &Record) -> Vec<Violation> {
    if !record.is_published() {
        return Vec::new();
    }
    let found = record.cna().is_some_and(|cna| {
        items(cna, "affected").any(|(_, product)| {
            is_affected_status(str_field(product, "defaultStatus"))
                || items(product, "versions")
                    .any(|(_, version)| is_affected_status(str_field(version, "status")))
        })
    });
    if found {
        Vec::new()
    } else {
        vec![Violation::at("No affected product found", "containers.cna.affected")]
    }
}

fn version_violation(version: &str, path: String) -> Violation {
    if version.starts_with("pkg:") {
        Violation::at(format!("Invalid purl in package version string: {version}"), path)
    } else {
        Violation::at(format!("Invalid version string: \"{version}\""), path)
    }
}

/// E007: version bounds and change points must be well-formed.
pub fn check_invalid_version_string(record: &Record) -> Vec<Violation> {
    let Some(cna) = affected(record) else {
        return Vec::new();
    };
    let mut violations = Vec::new();
    for (i, product) in items(cna, "affected") {
        for (j, entry) in items(product, "versions") {
            let base = format!("containers.cna.affected.{i}.versions.{j}");
            for field in VERSION_FIELDS {
                if let Some(version) = str_field(entry, field) {
                    if !is_valid_version(version) {
                        violations.push(version_violation(version, format!("{base}.{field}")));
                    }
                }
            }
            for (k, change) in items(entry, "changes") {
                if let Some(at) = str_field(change, "at") {
                    if !is_valid_version(at) {
                        violations.push(version_violation(at, format!("{base}.changes.{k}.at")));
                    }
                }
            }
        }
    }
    violations
}

fn check_name_field(record: &Record, field: &str, label: &str) -> Vec<Violation> {
    let Some(cna) = affected(record) else {
        return Vec::new();
    };
    items(cna, "affected")
        .filter_map(|(i, product)| {
            let name = str_field(product, field)?;
            is_invalid_name(name).then(|| {
                Violation::at(
                    format!("Invalid {label} string: \"{name}\""),
                    format!("containers.cna.affected.{i}.{field}"),
                )
            })
        })
        .collect()
}

/// E008: vendor must name a real vendor.
pub fn check_invalid_vendor_string(record: &Record) -> Vec<Violation> {
    check_name_field(record, "vendor", "vendor")
}

/// E009: product must name a real product.
pub fn check_invalid_product_string(record: &Record) -> Vec<Violation> {
    check_name_field(record, "product", "product")
}
