//! Reference checks: URL protocol, duplicates and self-references.

use std::sync::LazyLock;

use cvelint_core::types::FxHashMap;
use regex::Regex;
use serde_json::Value;

use crate::record::{items, str_field, Record};
use crate::rules::types::Violation;

static REFERENCE_URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(ftps?|https?)://").ok());

fn has_allowed_protocol(url: &str) -> bool {
    REFERENCE_URL_RE.as_ref().is_some_and(|re| re.is_match(url))
}

/// E001: CNA reference URLs must use ftp(s) or http(s).
pub fn check_reference_url_protocol(record: &Record) -> Vec<Violation> {
    let Some(cna) = record.cna() else {
        return Vec::new();
    };
    items(cna, "references")
        .filter_map(|(i, reference)| {
            let url = str_field(reference, "url")?;
            (!has_allowed_protocol(url)).then(|| {
                Violation::at(
                    format!("Invalid reference URL: {url}"),
                    format!("containers.cna.references.{i}.url"),
                )
            })
        })
        .collect()
}

/// E002: a URL may appear only once across CNA and ADP references.
pub fn check_duplicate_reference_url(record: &Record) -> Vec<Violation> {
    let document = record.document();
    let cna_refs = document
        .pointer("/containers/cna")
        .into_iter()
        .flat_map(|cna| items(cna, "references"));
    let adp_refs = document
        .pointer("/containers/adp")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .flat_map(|adp| items(adp, "references"));

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut first_seen: Vec<&str> = Vec::new();
    for (_, reference) in cna_refs.chain(adp_refs) {
        let Some(url) = str_field(reference, "url") else {
            continue;
        };
        let count = counts.entry(url).or_insert(0);
        if *count == 0 {
            first_seen.push(url);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|url| counts.get(url).copied().unwrap_or(0) > 1)
        .map(|url| Violation::new(format!("Duplicate reference URL: {url}")))
        .collect()
}

/// `true` when `url` points at the public page of record `cve_id`.
pub fn is_self_reference(url: &str, cve_id: &str) -> bool {
    let normalized = url.trim().to_ascii_lowercase();
    let normalized = normalized.trim_end_matches('/');
    let Some(rest) = normalized
        .strip_prefix("https://")
        .or_else(|| normalized.strip_prefix("http://"))
    else {
        return false;
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let id = cve_id.to_ascii_lowercase();
    rest.strip_prefix("cve.org/cverecord?id=") == Some(id.as_str())
        || rest.strip_prefix("cve.mitre.org/cgi-bin/cvename.cgi?name=") == Some(id.as_str())
}

/// E010: references must not point back at the record's own page. A record
/// whose only references are self-references also lacks an external one.
pub fn check_invalid_self_references(record: &Record) -> Vec<Violation> {
    if !record.is_published() {
        return Vec::new();
    }
    let Some(cna) = record.cna() else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    let mut others = 0usize;
    for (i, reference) in items(cna, "references") {
        let Some(url) = str_field(reference, "url") else {
            continue;
        };
        if is_self_reference(url, record.cve_id()) {
            violations.push(Violation::at(
                format!("Unnecessary self-reference: {url}"),
                format!("containers.cna.references.{i}.url"),
            ));
        } else {
            others += 1;
        }
    }
    if !violations.is_empty() && others == 0 {
        violations.push(Violation::at(
            "No valid external reference",
            "containers.cna.references",
        ));
    }
    violations
}
