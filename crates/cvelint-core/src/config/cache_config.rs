//! Corpus cache configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_STALE_MINUTES, DEFAULT_CORPUS_REPOSITORY};

/// Where and how the public record corpus is cached locally.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory. Unset = platform cache location.
    pub dir: Option<PathBuf>,
    /// Git URL of the corpus repository.
    pub repository_url: Option<String>,
    /// Refresh the checkout when its last fetch is older than this.
    pub stale_after_minutes: Option<u64>,
}

impl CacheConfig {
    pub fn effective_repository_url(&self) -> &str {
        self.repository_url
            .as_deref()
            .unwrap_or(DEFAULT_CORPUS_REPOSITORY)
    }

    pub fn effective_stale_after_minutes(&self) -> u64 {
        self.stale_after_minutes
            .unwrap_or(DEFAULT_CACHE_STALE_MINUTES)
    }
}
