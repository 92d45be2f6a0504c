//! Tests for the cvelint configuration system.

use std::sync::Mutex;

use cvelint_core::config::{CliOverrides, LintConfig};
use cvelint_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CVELINT_ env vars and point HOME at an empty directory so a
/// developer's own user config cannot leak into the assertions.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "CVELINT_SCAN_THREADS",
        "CVELINT_OUTPUT_FORMAT",
        "CVELINT_CACHE_DIR",
        "CVELINT_CACHE_STALE_MINUTES",
        "CVELINT_RULES_SELECT",
        "CVELINT_RULES_IGNORE",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cvelint.toml"),
        r#"
[scan]
threads = 2
channel_capacity = 64

[output]
format = "json"
"#,
    )
    .unwrap();

    std::env::set_var("CVELINT_SCAN_THREADS", "6");

    let cli = CliOverrides {
        format: Some("csv".to_string()),
        ..Default::default()
    };

    let config = LintConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI wins over project for format
    assert_eq!(config.output.effective_format(), "csv");
    // Env wins over project for threads
    assert_eq!(config.scan.effective_threads(), 6);
    // Project value survives where nothing overrides it
    assert_eq!(config.scan.effective_channel_capacity(), 64);

    isolate_env(home.path());
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = LintConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scan.effective_threads(), 0);
    assert_eq!(config.scan.effective_channel_capacity(), 1024);
    assert_eq!(config.scan.effective_extension(), "json");
    assert_eq!(config.output.effective_format(), "text");
    assert!(config.output.effective_color());
    assert!(!config.output.effective_summary());
    assert_eq!(config.cache.effective_stale_after_minutes(), 60);
    assert!(config.rules.select.is_empty());
}

#[test]
fn test_user_config_is_lowest_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".cvelint");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[rules]
ignore = ["E004"]

[output]
format = "json"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cvelint.toml"),
        r#"
[output]
format = "csv"
"#,
    )
    .unwrap();

    let config = LintConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.output.effective_format(), "csv");
    assert_eq!(config.rules.ignore, vec!["E004".to_string()]);
}

#[test]
fn test_env_rule_lists() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("CVELINT_RULES_SELECT", "E001,E005");
    std::env::set_var("CVELINT_RULES_IGNORE", "E005");

    let dir = tempdir();
    let config = LintConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.rules.select, vec!["E001", "E005"]);
    assert_eq!(config.rules.ignore, vec!["E005"]);

    isolate_env(home.path());
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("cvelint.toml"), "this is not valid toml {{{{").unwrap();

    match LintConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cvelint.toml"),
        r#"
[scan]
channel_capacity = 0
"#,
    )
    .unwrap();

    match LintConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "scan.channel_capacity");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_unsupported_format_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let cli = CliOverrides {
        format: Some("xml".to_string()),
        ..Default::default()
    };

    match LintConfig::load(dir.path(), Some(&cli)).unwrap_err() {
        ConfigError::InvalidValue { field, message } => {
            assert_eq!(field, "output.format");
            assert!(message.contains("xml"));
        }
        other => panic!("Expected InvalidValue, got: {:?}", other),
    }
}

#[test]
fn test_non_numeric_thread_env_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("CVELINT_SCAN_THREADS", "many");
    let dir = tempdir();
    let result = LintConfig::load(dir.path(), None);
    isolate_env(home.path());

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_unrecognized_keys_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cvelint.toml"),
        r#"
[scan]
threads = 3
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    )
    .unwrap();

    let config = LintConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.scan.threads, Some(3));
}

#[test]
fn test_config_round_trip() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("cvelint.toml"),
        r#"
[scan]
threads = 4

[rules]
select = ["E001", "E002"]

[cache]
dir = "/var/cache/cvelint"
stale_after_minutes = 15
"#,
    )
    .unwrap();

    let config1 = LintConfig::load(dir.path(), None).unwrap();
    let toml_str = config1.to_toml().unwrap();
    let config2 = LintConfig::from_toml(&toml_str).unwrap();

    assert_eq!(config1.scan.threads, config2.scan.threads);
    assert_eq!(config1.rules.select, config2.rules.select);
    assert_eq!(config1.cache.dir, config2.cache.dir);
    assert_eq!(
        config1.cache.stale_after_minutes,
        config2.cache.stale_after_minutes
    );
}
