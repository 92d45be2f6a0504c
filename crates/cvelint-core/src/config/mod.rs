//! Configuration system for cvelint.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod cache_config;
pub mod lint_config;
pub mod output_config;
pub mod rules_config;
pub mod scan_config;

pub use cache_config::CacheConfig;
pub use lint_config::{home_dir, CliOverrides, LintConfig};
pub use output_config::OutputConfig;
pub use rules_config::RulesConfig;
pub use scan_config::ScanConfig;
