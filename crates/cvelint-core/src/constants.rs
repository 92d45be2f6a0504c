//! Shared constants for the cvelint record linter.

/// cvelint version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension of record documents collected from a directory walk.
pub const DEFAULT_RECORD_EXTENSION: &str = "json";

/// Default number of engine worker threads (0 = one per core).
pub const DEFAULT_THREADS: usize = 0;

/// Capacity of each engine result channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Default output format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "text";

/// Recognized output formats.
pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

/// Public CVE list repository materialized when no target is given.
pub const DEFAULT_CORPUS_REPOSITORY: &str = "https://github.com/CVEProject/cvelistV5.git";

/// Directory name of the corpus checkout inside the cache directory.
pub const CORPUS_DIR_NAME: &str = "cvelistV5";

/// A corpus checkout older than this is refreshed before a run.
pub const DEFAULT_CACHE_STALE_MINUTES: u64 = 60;

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "cvelint.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CVELINT_LOG";

/// Default tracing filter when `CVELINT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "cvelint=warn";

// ---- Record fields ----

/// Record state of a published CVE record.
pub const STATE_PUBLISHED: &str = "PUBLISHED";

/// Record state of a rejected CVE record.
pub const STATE_REJECTED: &str = "REJECTED";
