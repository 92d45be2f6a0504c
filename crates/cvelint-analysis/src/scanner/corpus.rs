//! Cached checkout of the public CVE list repository.
//!
//! Used when no target is given. The checkout lives at
//! `<cache dir>/cvelistV5` and is cloned on first use. Afterwards it is
//! fetched and fast-forwarded whenever `.git/FETCH_HEAD` is missing or older
//! than the configured staleness window.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use cvelint_core::config::CacheConfig;
use cvelint_core::constants::CORPUS_DIR_NAME;
use cvelint_core::errors::CorpusError;
use git2::build::CheckoutBuilder;
use git2::Repository;
use tracing::{debug, info, warn};

/// Location and refresh policy of the local corpus checkout.
#[derive(Debug, Clone)]
pub struct CorpusCache {
    cache_dir: PathBuf,
    repository_url: String,
    stale_after: Duration,
}

impl CorpusCache {
    pub fn new(cache_dir: PathBuf, repository_url: impl Into<String>, stale_after: Duration) -> Self {
        Self {
            cache_dir,
            repository_url: repository_url.into(),
            stale_after,
        }
    }

    /// Build from the `[cache]` settings, resolving the cache directory.
    pub fn from_config(cache: &CacheConfig) -> Result<Self, CorpusError> {
        Ok(Self::new(
            resolve_cache_dir(cache)?,
            cache.effective_repository_url(),
            Duration::from_secs(cache.effective_stale_after_minutes() * 60),
        ))
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn corpus_dir(&self) -> PathBuf {
        self.cache_dir.join(CORPUS_DIR_NAME)
    }

    /// Clone or refresh the checkout and return its directory.
    pub fn materialize(&self) -> Result<PathBuf, CorpusError> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|source| CorpusError::Io {
            path: self.cache_dir.clone(),
            source,
        })?;

        let corpus_dir = self.corpus_dir();
        if !corpus_dir.exists() {
            self.clone_into(&corpus_dir)?;
        } else if self.is_stale(&corpus_dir) {
            self.update(&corpus_dir)?;
        } else {
            debug!(path = %corpus_dir.display(), "corpus is fresh");
        }
        Ok(corpus_dir)
    }

    /// `true` when the last fetch is missing or older than the staleness window.
    pub fn is_stale(&self, corpus_dir: &Path) -> bool {
        let fetch_head = corpus_dir.join(".git").join("FETCH_HEAD");
        let modified = std::fs::metadata(&fetch_head).and_then(|m| m.modified());
        match modified {
            Ok(modified) => SystemTime::now()
                .duration_since(modified)
                .map(|age| age > self.stale_after)
                .unwrap_or(false),
            Err(_) => true,
        }
    }

    fn clone_into(&self, corpus_dir: &Path) -> Result<(), CorpusError> {
        info!(url = %self.repository_url, path = %corpus_dir.display(), "cloning corpus");
        Repository::clone(&self.repository_url, corpus_dir).map_err(git_error("clone", corpus_dir))?;
        Ok(())
    }

    fn update(&self, corpus_dir: &Path) -> Result<(), CorpusError> {
        info!(path = %corpus_dir.display(), "updating corpus");
        let repo = Repository::open(corpus_dir).map_err(git_error("open", corpus_dir))?;

        let mut remote = repo
            .find_remote("origin")
            .map_err(git_error("fetch", corpus_dir))?;
        remote
            .fetch(&[] as &[&str], None, None)
            .map_err(git_error("fetch", corpus_dir))?;

        let head = repo.head().map_err(git_error("read HEAD of", corpus_dir))?;
        let (Some(head_name), Some(branch)) = (head.name(), head.shorthand()) else {
            warn!(path = %corpus_dir.display(), "corpus HEAD is detached; not fast-forwarding");
            return Ok(());
        };
        let head_name = head_name.to_string();
        let upstream_name = format!("refs/remotes/origin/{branch}");

        let upstream = repo
            .find_reference(&upstream_name)
            .map_err(git_error("find upstream in", corpus_dir))?;
        let upstream = repo
            .reference_to_annotated_commit(&upstream)
            .map_err(git_error("resolve upstream in", corpus_dir))?;
        let (analysis, _) = repo
            .merge_analysis(&[&upstream])
            .map_err(git_error("analyze", corpus_dir))?;

        if analysis.is_up_to_date() {
            debug!(path = %corpus_dir.display(), "corpus already up to date");
        } else if analysis.is_fast_forward() {
            let mut reference = repo
                .find_reference(&head_name)
                .map_err(git_error("fast-forward", corpus_dir))?;
            reference
                .set_target(upstream.id(), "cvelint: fast-forward")
                .map_err(git_error("fast-forward", corpus_dir))?;
            repo.set_head(&head_name)
                .map_err(git_error("fast-forward", corpus_dir))?;
            repo.checkout_head(Some(CheckoutBuilder::default().force()))
                .map_err(git_error("check out", corpus_dir))?;
            info!(path = %corpus_dir.display(), "corpus fast-forwarded");
        } else {
            warn!(path = %corpus_dir.display(), "corpus has diverged from origin; leaving it as is");
        }
        Ok(())
    }
}

fn git_error(operation: &'static str, path: &Path) -> impl FnOnce(git2::Error) -> CorpusError {
    let path = path.to_path_buf();
    move |e| CorpusError::Git {
        operation,
        path,
        message: e.message().to_string(),
    }
}

/// Cache directory: configured, then `$XDG_CACHE_HOME/cvelint`, then the
/// platform default.
pub fn resolve_cache_dir(cache: &CacheConfig) -> Result<PathBuf, CorpusError> {
    if let Some(ref dir) = cache.dir {
        return Ok(dir.clone());
    }
    if let Some(xdg) = std::env::var_os("XDG_CACHE_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("cvelint"));
    }
    platform_cache_dir()
}

#[cfg(windows)]
fn platform_cache_dir() -> Result<PathBuf, CorpusError> {
    std::env::var_os("LOCALAPPDATA")
        .filter(|v| !v.is_empty())
        .map(|dir| PathBuf::from(dir).join("cvelint"))
        .ok_or_else(|| CorpusError::CacheDir("LOCALAPPDATA is not set".to_string()))
}

#[cfg(not(windows))]
fn platform_cache_dir() -> Result<PathBuf, CorpusError> {
    cvelint_core::config::home_dir()
        .map(|home| home.join(".cache").join("cvelint"))
        .ok_or_else(|| CorpusError::CacheDir("unable to determine home directory".to_string()))
}
