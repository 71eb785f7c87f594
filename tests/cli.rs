use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".analytics-dashboard").join("config.json")
}

const BINARY_NAME: &str = "analytics-dashboard";
const CONFIG_PATH_ENV: &str = "ANALYTICS_DASHBOARD_CONFIG";

fn dashboard_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env(CONFIG_PATH_ENV, config_file_path(dir));
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// init-config should write a config file holding the given URL.
fn init_config_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    dashboard_cmd(&tmp)
        .arg("init-config")
        .arg("--api-url")
        .arg("http://analytics.internal:9000/api/analytics")
        .assert()
        .success()
        .stdout(contains("Wrote default configuration"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("http://analytics.internal:9000/api/analytics"));
    assert!(written.contains("5000"));
}

#[test]
/// A zero refresh interval is rejected before the dashboard starts.
fn start_rejects_zero_refresh_interval() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .args(["start", "--headless", "--refresh-interval-ms", "0"])
        .assert()
        .failure()
        .stderr(contains("refresh interval must be greater than zero"));
}

#[test]
/// Only http(s) API URLs are accepted.
fn start_rejects_non_http_url() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .args(["start", "--headless", "--api-url", "ftp://localhost/api/analytics"])
        .assert()
        .failure()
        .stderr(contains("api_url must be an http(s) URL"));
}

#[test]
/// A malformed config file is reported instead of silently replaced.
fn start_rejects_malformed_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{ not json").unwrap();

    dashboard_cmd(&tmp)
        .args(["start", "--headless"])
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}

#[test]
/// health fails when nothing is listening at the API URL.
fn health_fails_when_backend_unreachable() {
    let tmp = temp_config_dir();
    dashboard_cmd(&tmp)
        .args(["health", "--api-url", "http://127.0.0.1:1/api/analytics"])
        .assert()
        .failure()
        .stderr(contains("Backend is unreachable"));
}
