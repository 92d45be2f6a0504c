//! Engine and file-collection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_RECORD_EXTENSION, DEFAULT_THREADS};

/// Configuration for file collection and the validation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker threads. 0 = one per core.
    pub threads: Option<usize>,
    /// Capacity of each result channel. Default: 1024.
    pub channel_capacity: Option<usize>,
    /// Record file extension (without the dot). Default: "json".
    pub extension: Option<String>,
}

impl ScanConfig {
    /// Returns the effective worker thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    /// Returns the effective result channel capacity, defaulting to 1024.
    pub fn effective_channel_capacity(&self) -> usize {
        self.channel_capacity.unwrap_or(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Returns the effective record extension, defaulting to "json".
    pub fn effective_extension(&self) -> &str {
        self.extension.as_deref().unwrap_or(DEFAULT_RECORD_EXTENSION)
    }
}
