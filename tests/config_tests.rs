// Integration tests for configuration files on disk

use std::io::Write;
use std::time::Duration;

use algotrace::catalog::Request;
use algotrace::config::{Config, ConfigError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        [limits]
        max_sort_len = 4

        [playback]
        interval_ms = 250
        "#,
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.limits.max_sort_len, 4);
    assert_eq!(config.limits.max_search_len, 15);
    assert_eq!(config.playback.interval(), Duration::from_millis(250));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load(&path).unwrap_err();
    match err {
        ConfigError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadFile, got {:?}", other),
    }
}

#[test]
fn test_malformed_file() {
    let file = write_config("[limits\nmax_sort_len = 4");
    assert!(matches!(
        Config::load(file.path()),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn test_no_path_means_defaults() {
    assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}

#[test]
fn test_loaded_limits_gate_requests() {
    let file = write_config("[limits]\nmax_fibonacci = 20\n");
    let config = Config::load(file.path()).unwrap();

    let ok = Request::Fibonacci {
        n: 20,
        memoized: true,
    };
    assert!(config.limits.check(&ok).is_ok());

    let too_big = Request::Fibonacci {
        n: 21,
        memoized: true,
    };
    let err = config.limits.check(&too_big).unwrap_err();
    assert_eq!(
        err.to_string(),
        "fibonacci index has 21 entries, the limit is 20"
    );
}
