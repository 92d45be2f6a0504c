//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_FORMAT;

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// One of "text", "json", "csv". Default: "text".
    pub format: Option<String>,
    /// Render the per-organization summary instead of the finding listing.
    pub summary: Option<bool>,
    /// ANSI styling in text output. Default: true.
    pub color: Option<bool>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }

    pub fn effective_summary(&self) -> bool {
        self.summary.unwrap_or(false)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
