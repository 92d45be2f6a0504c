//! cvelint-core: shared foundation for the cvelint record linter.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable error code
//! - Config: TOML-based layered configuration (CLI > env > project > user > defaults)
//! - Tracing: `CVELINT_LOG`-driven subscriber setup
//! - Types: record identifiers and collection aliases
//! - Constants: defaults shared by the analysis crate and the CLI

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::LintConfig;
pub use errors::{LintError, LintErrorCode};
pub use types::{RecordId, RecordKey};
