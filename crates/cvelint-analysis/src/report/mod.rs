//! Derived views over a completed run report.

pub mod views;

pub use views::{OrgSummary, RecordGroup, RuleCount};
