//! Integration tests for the `logtally` binary.
//!
//! Runs the compiled binary against real log and TOML files and checks
//! stdout, stderr and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const APP_LOG: &str = "\
2023-01-01 12:00:00,000 INFO django.request: GET /api/v1/users
2023-01-01 12:00:01,000 INFO django.request: GET /api/v1/users
2023-01-01 12:00:02,000 ERROR django.request: Internal Server Error: /admin/
2023-01-01 12:00:03,000 DEBUG django.db.backends: (0.001) SELECT 1
";

const WORKER_LOG: &str = "\
2023-01-01 13:00:00,000 WARNING django.request: POST /api/v1/orders
2023-01-01 13:00:01,000 INFO django.request: GET /api/v1/users
";

fn logtally(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logtally"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("should run logtally binary")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("should write fixture");
    path.display().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_report_text_over_two_files() {
    // Given: two log files
    let temp_dir = TempDir::new().expect("should create temp dir");
    let app = write(temp_dir.path(), "app.log", APP_LOG);
    let worker = write(temp_dir.path(), "worker.log", WORKER_LOG);

    // When: running the handlers report
    let output = logtally(&["report", "--report", "handlers", &app, &worker]);

    // Then: the merged table is printed to stdout
    assert!(output.status.success(), "report should succeed: {:?}", output);
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Total requests: 5");
    assert!(lines[1].starts_with("HANDLER"));
    assert_eq!(lines.len(), 3 + 3, "one row per handler");
    assert!(text.contains("/api/v1/orders"));
}

#[test]
fn test_report_json_output() {
    // Given: one log file
    let temp_dir = TempDir::new().expect("should create temp dir");
    let app = write(temp_dir.path(), "app.log", APP_LOG);

    // When: requesting JSON output
    let output = logtally(&["--output", "json", "report", "-r", "handlers", &app]);

    // Then: stdout is a JSON document with the merged table
    assert!(output.status.success(), "report should succeed: {:?}", output);
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(json["total"].as_u64(), Some(3));
    assert_eq!(json["handlers"]["/api/v1/users"]["INFO"].as_u64(), Some(2));
    assert_eq!(json["handlers"]["/admin/"]["ERROR"].as_u64(), Some(1));
    assert_eq!(json["sources"][0]["lines_read"].as_u64(), Some(4));
}

#[test]
fn test_report_missing_file_fails_without_output() {
    // Given: one existing file and one missing file
    let temp_dir = TempDir::new().expect("should create temp dir");
    let app = write(temp_dir.path(), "app.log", APP_LOG);
    let missing = temp_dir.path().join("missing.log").display().to_string();

    // When: running the report
    let output = logtally(&["report", "--report", "handlers", &app, &missing]);

    // Then: exit code 3, no report on stdout, the missing path on stderr
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty(), "no partial report should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.log"), "stderr should name the file: {stderr}");
}

#[test]
fn test_report_unknown_kind_is_usage_error() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let app = write(temp_dir.path(), "app.log", APP_LOG);

    let output = logtally(&["report", "--report", "users", &app]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("handlers"), "should list valid reports: {stderr}");
}

#[test]
fn test_report_uses_config_levels() {
    // Given: a config that only shows ERROR and INFO columns
    let temp_dir = TempDir::new().expect("should create temp dir");
    let app = write(temp_dir.path(), "app.log", APP_LOG);
    let config = write(
        temp_dir.path(),
        "logtally.toml",
        "[handlers]\nlevels = [\"ERROR\", \"INFO\"]\ncolumn_step = 2\n",
    );

    // When: running the report with that config
    let output = logtally(&["-c", &config, "report", "-r", "handlers", &app]);

    // Then: the header follows the configured columns
    assert!(output.status.success(), "report should succeed: {:?}", output);
    let text = stdout(&output);
    let header: Vec<&str> = text.lines().nth(1).expect("header line").split_whitespace().collect();
    assert_eq!(header, vec!["HANDLER", "ERROR", "INFO"]);
}

#[test]
fn test_config_validate_default() {
    let output = logtally(&["config", "validate"]);
    assert!(output.status.success(), "defaults should validate: {:?}", output);
    assert!(stdout(&output).contains("VALID"));
}

#[test]
fn test_config_validate_bad_pattern() {
    // Given: a pattern with the wrong number of capture groups
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config = write(
        temp_dir.path(),
        "bad.toml",
        "[handlers]\npattern = '^(\\w+) (\\S+)$'\n",
    );

    // When: validating
    let output = logtally(&["--output", "json", "-c", &config, "config", "validate"]);

    // Then: exit code 2 and the reason in the report
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert_eq!(json["valid"].as_bool(), Some(false));
    assert!(
        json["errors"][0]
            .as_str()
            .is_some_and(|e| e.contains("capture groups")),
        "error should mention capture groups: {json}"
    );
}

#[test]
fn test_config_validate_missing_file() {
    let output = logtally(&["-c", "/nonexistent/logtally.toml", "config", "validate"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_show_handlers_section() {
    let output = logtally(&["config", "show", "--section", "handlers"]);
    assert!(output.status.success(), "show should succeed: {:?}", output);
    let text = stdout(&output);
    assert!(text.contains("django.request"));
    assert!(text.contains("column_step = 5"));
}

#[test]
fn test_config_show_unknown_section() {
    let output = logtally(&["config", "show", "--section", "ebpf"]);
    assert_eq!(output.status.code(), Some(1));
}
