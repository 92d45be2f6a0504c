//! Validation engine errors.
//!
//! These are startup/infrastructure failures only. Per-file read and parse
//! failures are recorded in the run report and never surface here.

use super::error_code::{self, LintErrorCode};

/// Errors that prevent the engine from completing a run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Failed to spawn {sink} collector: {source}")]
    CollectorSpawn {
        sink: &'static str,
        source: std::io::Error,
    },

    #[error("The {sink} collector panicked")]
    CollectorPanicked { sink: &'static str },
}

impl LintErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        error_code::ENGINE_ERROR
    }
}
