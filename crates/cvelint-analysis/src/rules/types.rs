//! Core types for the rule catalogue.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One rule violation as returned by a check operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub message: String,
    /// Dotted JSON path into the record, with concrete array indices.
    pub path: Option<String>,
}

impl Violation {
    /// A violation that is not tied to one location in the record.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// A violation located at `path`.
    pub fn at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Signature of a check operation: pure, total, no I/O.
pub type CheckFn = fn(&Record) -> Vec<Violation>;

/// A catalogue entry: stable code, slug name, description and check.
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: CheckFn,
}

impl RuleDescriptor {
    /// Run this rule's check against one record.
    pub fn check(&self, record: &Record) -> Vec<Violation> {
        (self.check)(record)
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RuleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for RuleDescriptor {}
