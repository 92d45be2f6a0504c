//! Engine result types.

use std::fmt;
use std::path::{Path, PathBuf};

use cvelint_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::rules::{RuleDescriptor, Violation};

/// One rule violation attributed to a record and file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub record_id: RecordId,
    pub organization: String,
    pub file: PathBuf,
    pub rule_code: String,
    pub rule_name: String,
    pub message: String,
    pub path: Option<String>,
}

impl Finding {
    pub fn new(record: &Record, file: &Path, rule: &RuleDescriptor, violation: Violation) -> Self {
        Self {
            record_id: record.id().clone(),
            organization: record.organization().to_string(),
            file: file.to_path_buf(),
            rule_code: rule.code.to_string(),
            rule_name: rule.name.to_string(),
            message: violation.message,
            path: violation.path,
        }
    }
}

/// Why a file could not be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileErrorKind {
    Unreadable,
    InvalidJson,
}

impl FileErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unreadable => "unreadable",
            Self::InvalidJson => "invalid_json",
        }
    }
}

/// A file-level failure. Carries no record ID or organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub file: PathBuf,
    pub kind: FileErrorKind,
    pub message: String,
}

impl FileError {
    pub fn unreadable(file: &Path, error: &std::io::Error) -> Self {
        Self {
            file: file.to_path_buf(),
            kind: FileErrorKind::Unreadable,
            message: error.to_string(),
        }
    }

    pub fn invalid_json(file: &Path, error: &serde_json::Error) -> Self {
        Self {
            file: file.to_path_buf(),
            kind: FileErrorKind::InvalidJson,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            FileErrorKind::Unreadable => "Could not read file",
            FileErrorKind::InvalidJson => "File contains invalid JSON",
        };
        write!(f, "{what}: {} ({})", self.file.display(), self.message)
    }
}

/// Why a classified file produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoOrganization,
    OrganizationFiltered,
}

/// Terminal state of one submitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    ReadFailed,
    ParseFailed,
    Skipped(SkipReason),
    Checked { findings: usize },
}

/// The result of one run. Holds no wall-clock data, so runs over the same
/// input compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub findings: Vec<Finding>,
    pub file_errors: Vec<FileError>,
    pub files_checked: usize,
    pub files_collected: usize,
}
