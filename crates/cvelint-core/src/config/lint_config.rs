//! Top-level cvelint configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CacheConfig, OutputConfig, RulesConfig, ScanConfig};
use crate::constants::{OUTPUT_FORMATS, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CVELINT_*`)
/// 3. Project config (`cvelint.toml` in the working directory)
/// 4. User config (`~/.cvelint/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    pub scan: ScanConfig,
    pub rules: RulesConfig,
    pub output: OutputConfig,
    pub cache: CacheConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub threads: Option<usize>,
    pub format: Option<String>,
    pub summary: Option<bool>,
    pub color: Option<bool>,
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
}

impl LintConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LintConfig) -> Result<(), ConfigError> {
        if config.scan.channel_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.channel_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref extension) = config.scan.extension {
            if extension.is_empty() || extension.starts_with('.') {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extension".to_string(),
                    message: "must be a bare extension such as \"json\"".to_string(),
                });
            }
        }
        if config.cache.stale_after_minutes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "cache.stale_after_minutes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let format = config.output.effective_format();
        if !OUTPUT_FORMATS.contains(&format) {
            return Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!(
                    "\"{format}\" is not one of: {}",
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.cvelint/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".cvelint").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LintConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut LintConfig, other: &LintConfig) {
        // Scan
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.channel_capacity.is_some() {
            base.scan.channel_capacity = other.scan.channel_capacity;
        }
        if other.scan.extension.is_some() {
            base.scan.extension = other.scan.extension.clone();
        }

        // Rules
        if !other.rules.select.is_empty() {
            base.rules.select = other.rules.select.clone();
        }
        if !other.rules.ignore.is_empty() {
            base.rules.ignore = other.rules.ignore.clone();
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.summary.is_some() {
            base.output.summary = other.output.summary;
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }

        // Cache
        if other.cache.dir.is_some() {
            base.cache.dir = other.cache.dir.clone();
        }
        if other.cache.repository_url.is_some() {
            base.cache.repository_url = other.cache.repository_url.clone();
        }
        if other.cache.stale_after_minutes.is_some() {
            base.cache.stale_after_minutes = other.cache.stale_after_minutes;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CVELINT_SCAN_THREADS`, `CVELINT_OUTPUT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut LintConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CVELINT_SCAN_THREADS") {
            let threads = val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "CVELINT_SCAN_THREADS".to_string(),
                message: format!("\"{val}\" is not a thread count"),
            })?;
            config.scan.threads = Some(threads);
        }
        if let Ok(val) = std::env::var("CVELINT_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
        if let Ok(val) = std::env::var("CVELINT_CACHE_DIR") {
            if !val.is_empty() {
                config.cache.dir = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = std::env::var("CVELINT_CACHE_STALE_MINUTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.cache.stale_after_minutes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CVELINT_RULES_SELECT") {
            config.rules.select = RulesConfig::parse_codes(&val);
        }
        if let Ok(val) = std::env::var("CVELINT_RULES_IGNORE") {
            config.rules.ignore = RulesConfig::parse_codes(&val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LintConfig, cli: &CliOverrides) {
        if let Some(v) = cli.threads {
            config.scan.threads = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if let Some(v) = cli.summary {
            config.output.summary = Some(v);
        }
        if let Some(v) = cli.color {
            config.output.color = Some(v);
        }
        if let Some(ref v) = cli.select {
            config.rules.select = v.clone();
        }
        if let Some(ref v) = cli.ignore {
            config.rules.ignore = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
