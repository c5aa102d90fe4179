//! logtally.toml 통합 설정 테스트
//!
//! - logtally.toml.example 파싱 테스트
//! - 파일 로딩 + 환경변수 우선순위 테스트
//! - 빈 파일 / 잘못된 형식 에러 테스트

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use logtally_core::config::{DEFAULT_HANDLER_PATTERN, LogtallyConfig};
use logtally_core::error::{ConfigError, LogtallyError};

// =============================================================================
// logtally.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_parses_successfully() {
    let content = include_str!("../../../logtally.toml.example");
    let config = LogtallyConfig::parse(content).expect("example config should parse");

    assert_eq!(config.general.log_level, "warn");
    assert_eq!(config.general.log_format, "pretty");
    assert_eq!(config.handlers.marker, "django.request");
    assert_eq!(config.handlers.column_step, 5);
    assert_eq!(config.handlers.max_workers, 0);
}

#[test]
fn example_config_passes_validation() {
    let content = include_str!("../../../logtally.toml.example");
    let config = LogtallyConfig::parse(content).expect("should parse");
    config
        .validate()
        .expect("example config should pass validation");
}

#[test]
fn example_config_pattern_matches_builtin_default() {
    let content = include_str!("../../../logtally.toml.example");
    let config = LogtallyConfig::parse(content).expect("should parse");
    assert_eq!(config.handlers.pattern, DEFAULT_HANDLER_PATTERN);
}

// =============================================================================
// 파일 로딩 테스트
// =============================================================================

#[tokio::test]
#[serial]
async fn load_reads_file_and_validates() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("logtally.toml");
    fs::write(&path, "[handlers]\nmarker = \"app.request\"\n").expect("should write config");

    let config = LogtallyConfig::load(&path).await.expect("should load");
    assert_eq!(config.handlers.marker, "app.request");
}

#[tokio::test]
#[serial]
async fn env_var_overrides_file_value() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("logtally.toml");
    fs::write(&path, "[handlers]\ncolumn_step = 2\n").expect("should write config");

    // SAFETY: serial 테스트이므로 다른 스레드가 환경변수를 읽지 않습니다.
    unsafe { std::env::set_var("LOGTALLY_HANDLERS_COLUMN_STEP", "9") };
    let result = LogtallyConfig::load(&path).await;
    unsafe { std::env::remove_var("LOGTALLY_HANDLERS_COLUMN_STEP") };

    let config = result.expect("should load");
    assert_eq!(config.handlers.column_step, 9);
}

#[tokio::test]
#[serial]
async fn env_override_is_validated_after_merge() {
    // SAFETY: serial 테스트이므로 다른 스레드가 환경변수를 읽지 않습니다.
    unsafe { std::env::set_var("LOGTALLY_GENERAL_LOG_FORMAT", "xml") };
    let result = LogtallyConfig::load_or_default(None).await;
    unsafe { std::env::remove_var("LOGTALLY_GENERAL_LOG_FORMAT") };

    let err = result.expect_err("invalid env value should fail validation");
    assert!(err.to_string().contains("general.log_format"));
}

#[tokio::test]
async fn empty_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("empty.toml");
    fs::write(&path, "").expect("should write config");

    let config = LogtallyConfig::from_file(&path).await.expect("should load");
    assert_eq!(config.handlers.levels.len(), 5);
}

#[tokio::test]
async fn malformed_file_fails_with_parse_error() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[handlers\nmarker = 1\n").expect("should write config");

    let err = LogtallyConfig::from_file(&path)
        .await
        .expect_err("malformed TOML should fail");
    assert!(matches!(
        err,
        LogtallyError::Config(ConfigError::ParseFailed { .. })
    ));
}
