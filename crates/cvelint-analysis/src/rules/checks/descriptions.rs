//! Description checks.

use crate::record::{items, str_field, Record, RecordState};
use crate::rules::types::Violation;

/// Shortest acceptable description, in Unicode scalar values.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// E003: descriptions (rejection reasons for rejected records) must be at
/// least [`MIN_DESCRIPTION_LENGTH`] long and unique per language.
pub fn check_description_length(record: &Record) -> Vec<Violation> {
    let field = match record.state() {
        RecordState::Published => "descriptions",
        RecordState::Rejected => "rejectedReasons",
        RecordState::Other(_) => return Vec::new(),
    };
    let Some(cna) = record.cna() else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    // (lowercased tag, tag as first written, occurrences) in first-appearance order.
    let mut languages: Vec<(String, String, usize)> = Vec::new();
    for (i, description) in items(cna, field) {
        if let Some(lang) = str_field(description, "lang") {
            let key = lang.to_lowercase();
            match languages.iter_mut().find(|(k, _, _)| *k == key) {
                Some(entry) => entry.2 += 1,
                None => languages.push((key, lang.to_string(), 1)),
            }
        }
        if let Some(text) = str_field(description, "value") {
            if text.chars().count() < MIN_DESCRIPTION_LENGTH {
                violations.push(Violation::at(
                    format!("Description too short: {text}"),
                    format!("containers.cna.{field}.{i}.value"),
                ));
            }
        }
    }
    for (_, lang, count) in languages {
        if count > 1 {
            violations.push(Violation::at(
                format!("More than one {lang} description present"),
                format!("containers.cna.{field}"),
            ));
        }
    }
    violations
}

/// E004: published descriptions must not start or end with whitespace.
pub fn check_leading_trailing_space(record: &Record) -> Vec<Violation> {
    if !record.is_published() {
        return Vec::new();
    }
    let Some(cna) = record.cna() else {
        return Vec::new();
    };
    items(cna, "descriptions")
        .filter_map(|(i, description)| {
            let text = str_field(description, "value")?;
            (text.trim() != text).then(|| {
                Violation::at(
                    "Trailing or leading whitespace in description",
                    format!("containers.cna.descriptions.{i}.value"),
                )
            })
        })
        .collect()
}
