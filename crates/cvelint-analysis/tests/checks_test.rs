//! Rule check tests against hand-built CVE JSON 5.x records.

use cvelint_analysis::rules::{RuleCatalogue, Violation};
use cvelint_analysis::Record;
use cvelint_core::RecordId;
use serde_json::{json, Value};

const ID: &str = "CVE-2024-1234";

/// A published record that passes every rule.
fn clean_record() -> Value {
    json!({
        "cveMetadata": {
            "cveId": ID,
            "assignerShortName": "acme",
            "state": "PUBLISHED"
        },
        "containers": {
            "cna": {
                "descriptions": [
                    {"lang": "en", "value": "Buffer overflow in the widget parser allows code execution."}
                ],
                "affected": [
                    {
                        "vendor": "Acme",
                        "product": "Widget",
                        "versions": [
                            {"version": "1.0", "lessThan": "1.2", "status": "affected", "versionType": "semver"}
                        ]
                    }
                ],
                "references": [
                    {"url": "https://example.com/advisories/2024-01"}
                ],
                "metrics": [
                    {"cvssV3_1": {"baseScore": 7.5, "baseSeverity": "HIGH"}}
                ]
            }
        }
    })
}

fn check(code: &str, document: &Value) -> Vec<Violation> {
    let record = Record::classify(RecordId::new(ID), document.clone()).expect("record has an assigner");
    RuleCatalogue::standard()
        .lookup(code)
        .unwrap_or_else(|| panic!("{code} is in the catalogue"))
        .check(&record)
}

fn messages(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.message.as_str()).collect()
}

fn cna(document: &mut Value) -> &mut Value {
    &mut document["containers"]["cna"]
}

#[test]
fn clean_record_passes_every_rule() {
    let document = clean_record();
    for code in RuleCatalogue::standard().all_codes() {
        assert!(check(code, &document).is_empty(), "{code} flagged a clean record");
    }
}

#[test]
fn reference_protocol() {
    let mut document = clean_record();
    cna(&mut document)["references"] = json!([
        {"url": "https://ok.example"},
        {"url": "www.example.com/advisory"},
        {"url": "ftps://mirror.example/file"},
        {"url": "mailto:security@example.com"}
    ]);
    let violations = check("E001", &document);
    assert_eq!(
        messages(&violations),
        vec![
            "Invalid reference URL: www.example.com/advisory",
            "Invalid reference URL: mailto:security@example.com"
        ]
    );
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.references.1.url"));
    assert_eq!(violations[1].path.as_deref(), Some("containers.cna.references.3.url"));
}

#[test]
fn duplicate_references_span_cna_and_adp() {
    let mut document = clean_record();
    cna(&mut document)["references"] = json!([
        {"url": "https://a.example"},
        {"url": "https://b.example"},
        {"url": "https://a.example"}
    ]);
    document["containers"]["adp"] = json!([
        {"references": [{"url": "https://b.example"}, {"url": "https://c.example"}]}
    ]);
    let violations = check("E002", &document);
    assert_eq!(
        messages(&violations),
        vec![
            "Duplicate reference URL: https://a.example",
            "Duplicate reference URL: https://b.example"
        ]
    );
    assert!(violations.iter().all(|v| v.path.is_none()));
}

#[test]
fn description_length_and_uniqueness() {
    let mut document = clean_record();
    cna(&mut document)["descriptions"] = json!([
        {"lang": "en", "value": "Too short"},
        {"lang": "EN", "value": "A second English description of the issue."},
        {"lang": "de", "value": "Eine deutsche Beschreibung des Problems."}
    ]);
    let violations = check("E003", &document);
    assert_eq!(
        messages(&violations),
        vec![
            "Description too short: Too short",
            "More than one en description present"
        ]
    );
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.descriptions.0.value"));
    assert_eq!(violations[1].path.as_deref(), Some("containers.cna.descriptions"));
}

#[test]
fn description_length_counts_characters_not_bytes() {
    let mut document = clean_record();
    // Nine characters, more than ten bytes.
    cna(&mut document)["descriptions"] = json!([{"lang": "en", "value": "ÄÖÜäöüßéè"}]);
    assert_eq!(check("E003", &document).len(), 1);
    cna(&mut document)["descriptions"] = json!([{"lang": "en", "value": "ÄÖÜäöüßéèê"}]);
    assert!(check("E003", &document).is_empty());
}

#[test]
fn rejected_records_check_rejection_reasons() {
    let mut document = clean_record();
    document["cveMetadata"]["state"] = json!("REJECTED");
    document["containers"]["cna"] = json!({
        "rejectedReasons": [{"lang": "en", "value": "Dup"}]
    });
    let violations = check("E003", &document);
    assert_eq!(messages(&violations), vec!["Description too short: Dup"]);
    assert_eq!(
        violations[0].path.as_deref(),
        Some("containers.cna.rejectedReasons.0.value")
    );

    document["cveMetadata"]["state"] = json!("RESERVED");
    assert!(check("E003", &document).is_empty());
}

#[test]
fn leading_and_trailing_whitespace() {
    let mut document = clean_record();
    cna(&mut document)["descriptions"] = json!([
        {"lang": "en", "value": " Leading space in this description."},
        {"lang": "fr", "value": "Une description sans espace superflu."},
        {"lang": "de", "value": "Trailing newline in this description.\n"}
    ]);
    let violations = check("E004", &document);
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.descriptions.0.value"));
    assert_eq!(violations[1].path.as_deref(), Some("containers.cna.descriptions.2.value"));
}

#[test]
fn severity_mismatch_names_both_values() {
    let mut document = clean_record();
    cna(&mut document)["metrics"] = json!([
        {"cvssV3_1": {"baseScore": 9.8, "baseSeverity": "HIGH"}},
        {"cvssV4_0": {"baseScore": 5.3, "baseSeverity": "MEDIUM"}},
        {"cvssV2_0": {"baseScore": 9.8, "baseSeverity": "LOW"}}
    ]);
    let violations = check("E005", &document);
    assert_eq!(
        messages(&violations),
        vec![r#"Incorrect CVSS v3.1 severity: "high" (should be "critical")"#]
    );
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.metrics.0.cvssV3_1"));
}

#[test]
fn severity_boundaries() {
    let cases = [
        (0.0, "NONE"),
        (3.9, "LOW"),
        (4.0, "MEDIUM"),
        (6.9, "MEDIUM"),
        (7.0, "HIGH"),
        (8.9, "HIGH"),
        (9.0, "CRITICAL"),
        (10.0, "CRITICAL"),
    ];
    for (score, severity) in cases {
        let mut document = clean_record();
        cna(&mut document)["metrics"] =
            json!([{"cvssV3_0": {"baseScore": score, "baseSeverity": severity}}]);
        assert!(check("E005", &document).is_empty(), "{score} should be {severity}");

        cna(&mut document)["metrics"] =
            json!([{"cvssV3_0": {"baseScore": score, "baseSeverity": "bogus"}}]);
        assert_eq!(check("E005", &document).len(), 1, "mismatch at {score}");
    }
}

#[test]
fn severity_skips_unusable_metrics() {
    let mut document = clean_record();
    cna(&mut document)["metrics"] = json!([
        {"cvssV3_1": {"baseScore": "7.5", "baseSeverity": "LOW"}},
        {"cvssV3_1": {"baseScore": 11.0, "baseSeverity": "LOW"}},
        {"cvssV3_1": {"baseScore": 7.5}},
        {"other": {"content": {}}},
        "not an object"
    ]);
    assert!(check("E005", &document).is_empty());
}

#[test]
fn affected_product_presence() {
    let mut document = clean_record();
    cna(&mut document)["affected"] = json!([
        {"vendor": "Acme", "product": "Widget", "versions": [{"version": "1.0", "status": "unaffected"}]}
    ]);
    let violations = check("E006", &document);
    assert_eq!(messages(&violations), vec!["No affected product found"]);
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.affected"));

    cna(&mut document)["affected"][0]["defaultStatus"] = json!("unknown");
    assert!(check("E006", &document).is_empty());
}

#[test]
fn missing_cna_container_has_no_affected_product() {
    let mut document = clean_record();
    document["containers"] = json!({});
    assert_eq!(messages(&check("E006", &document)), vec!["No affected product found"]);

    document["containers"] = json!({"cna": {}});
    assert_eq!(messages(&check("E006", &document)), vec!["No affected product found"]);

    document["cveMetadata"]["state"] = json!("REJECTED");
    document["containers"] = json!({});
    assert!(check("E006", &document).is_empty());
}

#[test]
fn version_strings() {
    let mut document = clean_record();
    cna(&mut document)["affected"] = json!([{
        "vendor": "Acme",
        "product": "Widget",
        "versions": [
            {"version": "12.07 and earlier", "status": "affected"},
            {"version": "v1_2-3", "lessThan": ">=1.0", "status": "affected"},
            {"version": "pkg:npm/widget@1.0.0", "status": "affected"},
            {"version": "pkg:npm", "status": "affected"},
            {"version": "0", "lessThanOrEqual": "*", "status": "affected",
             "changes": [{"at": "1.5", "status": "unaffected"}, {"at": "n/a", "status": "unaffected"}]}
        ]
    }]);
    let violations = check("E007", &document);
    let located: Vec<(&str, &str)> = violations
        .iter()
        .map(|v| (v.message.as_str(), v.path.as_deref().unwrap_or("")))
        .collect();
    assert_eq!(
        located,
        vec![
            (
                "Invalid version string: \"12.07 and earlier\"",
                "containers.cna.affected.0.versions.0.version"
            ),
            (
                "Invalid version string: \">=1.0\"",
                "containers.cna.affected.0.versions.1.lessThan"
            ),
            (
                "Invalid purl in package version string: pkg:npm",
                "containers.cna.affected.0.versions.3.version"
            ),
            (
                "Invalid version string: \"n/a\"",
                "containers.cna.affected.0.versions.4.changes.1.at"
            ),
        ]
    );
}

#[test]
fn vendor_and_product_placeholders() {
    let mut document = clean_record();
    cna(&mut document)["affected"] = json!([
        {"vendor": "N/A", "product": "Widget", "defaultStatus": "affected"},
        {"vendor": "Acme", "product": "-", "defaultStatus": "affected"},
        {"vendor": "https://acme.example", "product": "https://acme.example/widget", "defaultStatus": "affected"}
    ]);
    assert_eq!(
        messages(&check("E008", &document)),
        vec![
            "Invalid vendor string: \"N/A\"",
            "Invalid vendor string: \"https://acme.example\""
        ]
    );
    let products = check("E009", &document);
    assert_eq!(
        messages(&products),
        vec![
            "Invalid product string: \"-\"",
            "Invalid product string: \"https://acme.example/widget\""
        ]
    );
    assert_eq!(products[0].path.as_deref(), Some("containers.cna.affected.1.product"));
}

#[test]
fn self_reference_only() {
    let mut document = clean_record();
    cna(&mut document)["references"] =
        json!([{"url": "https://www.cve.org/CVERecord?id=CVE-2024-1234"}]);
    let violations = check("E010", &document);
    assert_eq!(
        messages(&violations),
        vec![
            "Unnecessary self-reference: https://www.cve.org/CVERecord?id=CVE-2024-1234",
            "No valid external reference"
        ]
    );

    cna(&mut document)["references"]
        .as_array_mut()
        .unwrap()
        .push(json!({"url": "https://vendor.example/advisory"}));
    let violations = check("E010", &document);
    assert_eq!(
        messages(&violations),
        vec!["Unnecessary self-reference: https://www.cve.org/CVERecord?id=CVE-2024-1234"]
    );
    assert_eq!(violations[0].path.as_deref(), Some("containers.cna.references.0.url"));
}

#[test]
fn lone_bad_protocol_reference_is_not_a_self_reference() {
    let mut document = clean_record();
    cna(&mut document)["references"] = json!([{"url": "mailto:security@example.com"}]);
    assert_eq!(
        messages(&check("E001", &document)),
        vec!["Invalid reference URL: mailto:security@example.com"]
    );
    assert!(check("E010", &document).is_empty());

    cna(&mut document)["references"]
        .as_array_mut()
        .unwrap()
        .insert(0, json!({"url": "https://cve.org/CVERecord?id=CVE-2024-1234"}));
    assert_eq!(
        messages(&check("E010", &document)),
        vec!["Unnecessary self-reference: https://cve.org/CVERecord?id=CVE-2024-1234"]
    );
}

#[test]
fn published_only_checks_ignore_other_states() {
    let mut document = clean_record();
    cna(&mut document)["descriptions"] = json!([{"lang": "en", "value": " padded "}]);
    cna(&mut document)["affected"] = json!([
        {"vendor": "n/a", "product": "n/a", "versions": [{"version": "any", "status": "unaffected"}, {"version": "1 2"}]}
    ]);
    cna(&mut document)["references"] =
        json!([{"url": "https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-1234"}]);

    for code in ["E004", "E006", "E007", "E008", "E009", "E010"] {
        assert!(!check(code, &document).is_empty(), "{code} should fire while published");
    }
    for state in ["REJECTED", "RESERVED"] {
        document["cveMetadata"]["state"] = json!(state);
        for code in ["E004", "E006", "E007", "E008", "E009", "E010"] {
            assert!(check(code, &document).is_empty(), "{code} fired for {state}");
        }
    }
}

#[test]
fn checks_tolerate_unexpected_shapes() {
    let document = json!({
        "cveMetadata": {"assignerShortName": "acme", "state": "PUBLISHED"},
        "containers": {"cna": {"references": "nope", "affected": {}, "metrics": 3, "descriptions": [1, null]}}
    });
    for code in RuleCatalogue::standard().all_codes() {
        let _ = check(code, &document);
    }
    assert!(check("E001", &document).is_empty());
    assert_eq!(messages(&check("E006", &document)), vec!["No affected product found"]);
}
