//! Parsed record model.
//!
//! A record is a parsed CVE JSON 5.x document plus the metadata the engine
//! classifies it by: its ID (from the file name), its assigning organization
//! and its state. Documents without an assigner are not records of this
//! format and never become a `Record`.

use std::fmt;

use cvelint_core::constants::{STATE_PUBLISHED, STATE_REJECTED};
use cvelint_core::RecordId;
use serde_json::Value;

/// Lifecycle state from `cveMetadata.state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordState {
    Published,
    Rejected,
    /// Missing or unrecognized state.
    Other(String),
}

impl RecordState {
    fn from_document(document: &Value) -> Self {
        match document.pointer("/cveMetadata/state").and_then(Value::as_str) {
            Some(STATE_PUBLISHED) => Self::Published,
            Some(STATE_REJECTED) => Self::Rejected,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other(String::new()),
        }
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => f.write_str(STATE_PUBLISHED),
            Self::Rejected => f.write_str(STATE_REJECTED),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// One classified record, ready for rule checks.
#[derive(Debug, Clone)]
pub struct Record {
    id: RecordId,
    cve_id: String,
    organization: String,
    state: RecordState,
    document: Value,
}

impl Record {
    /// Classify a parsed document. Returns `None` when the document carries no
    /// `cveMetadata.assignerShortName`.
    pub fn classify(id: RecordId, document: Value) -> Option<Self> {
        let organization = document
            .pointer("/cveMetadata/assignerShortName")
            .and_then(Value::as_str)
            .filter(|org| !org.is_empty())?
            .to_string();
        let state = RecordState::from_document(&document);
        let cve_id = document
            .pointer("/cveMetadata/cveId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| id.as_str())
            .to_string();
        Some(Self {
            id,
            cve_id,
            organization,
            state,
            document,
        })
    }

    /// Parse and classify JSON text (used by tests and benches).
    pub fn from_json(id: &str, json: &str) -> Result<Option<Self>, serde_json::Error> {
        let document: Value = serde_json::from_str(json)?;
        Ok(Self::classify(RecordId::new(id), document))
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// The CVE ID declared inside the document, or the file-derived ID.
    pub fn cve_id(&self) -> &str {
        &self.cve_id
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn state(&self) -> &RecordState {
        &self.state
    }

    pub fn is_published(&self) -> bool {
        self.state == RecordState::Published
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The CNA container, if present.
    pub fn cna(&self) -> Option<&Value> {
        self.document.pointer("/containers/cna")
    }
}

/// Iterate `(index, item)` over the array at `value[key]`; empty for any other shape.
pub(crate) fn items<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = (usize, &'a Value)> + 'a {
    value
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
}

/// String field `value[key]`, if it is a string.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}
