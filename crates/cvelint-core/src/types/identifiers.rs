//! Record identifiers.
//!
//! A record ID is taken from the file name (`CVE-2024-12345.json` →
//! `CVE-2024-12345`) and parsed once into a `RecordKey` so report ordering
//! never has to re-split strings.

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Numeric sort key of a record ID: `<prefix>-<year>-<sequence>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub year: u32,
    pub sequence: u64,
}

impl RecordKey {
    /// Parse the year and sequence out of an ID like `CVE-2020-0001`.
    pub fn parse(id: &str) -> Option<Self> {
        let mut parts = id.split('-');
        let _prefix = parts.next()?;
        let year = parts.next()?.parse::<u32>().ok()?;
        let sequence = parts.next()?.parse::<u64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, sequence })
    }
}

/// Identifier of one record, with its parsed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordId {
    raw: String,
    key: Option<RecordKey>,
}

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = RecordKey::parse(&raw);
        Self { raw, key }
    }

    /// Derive the record ID from a file path by stripping the extension.
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn key(&self) -> Option<RecordKey> {
        self.key
    }

    /// Report order: most recent key first, unkeyed IDs last, ties by ID text.
    pub fn cmp_recent_first(&self, other: &Self) -> Ordering {
        match (self.key, other.key) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl From<String> for RecordId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.raw
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_year_and_sequence() {
        assert_eq!(
            RecordKey::parse("CVE-2020-0001"),
            Some(RecordKey { year: 2020, sequence: 1 })
        );
        assert_eq!(
            RecordKey::parse("CVE-2024-1234567"),
            Some(RecordKey { year: 2024, sequence: 1_234_567 })
        );
    }

    #[test]
    fn malformed_ids_have_no_key() {
        assert_eq!(RecordKey::parse("CVE-2020"), None);
        assert_eq!(RecordKey::parse("CVE-20x0-0001"), None);
        assert_eq!(RecordKey::parse("CVE-2020-0001-extra"), None);
        assert_eq!(RecordKey::parse("record"), None);
    }

    #[test]
    fn id_from_path_strips_extension() {
        let id = RecordId::from_path(&PathBuf::from("cves/2021/0xxx/CVE-2021-0042.json"));
        assert_eq!(id.as_str(), "CVE-2021-0042");
        assert_eq!(id.key(), Some(RecordKey { year: 2021, sequence: 42 }));
    }

    #[test]
    fn recent_first_ordering() {
        let newer = RecordId::new("CVE-2024-0001");
        let older_high_seq = RecordId::new("CVE-2023-99999");
        let same_year_higher = RecordId::new("CVE-2024-0100");
        let unkeyed = RecordId::new("notes");

        assert_eq!(newer.cmp_recent_first(&older_high_seq), Ordering::Less);
        assert_eq!(same_year_higher.cmp_recent_first(&newer), Ordering::Less);
        assert_eq!(older_high_seq.cmp_recent_first(&unkeyed), Ordering::Less);
        assert_eq!(unkeyed.cmp_recent_first(&newer), Ordering::Greater);
    }

    #[test]
    fn numeric_not_lexical_sequence() {
        let a = RecordId::new("CVE-2024-9999");
        let b = RecordId::new("CVE-2024-10000");
        assert_eq!(b.cmp_recent_first(&a), Ordering::Less);
    }
}
