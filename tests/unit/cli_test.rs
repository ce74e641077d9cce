//! Integration tests for the statusctl CLI

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::MockServer;

/// Command with an isolated home directory and no connection overrides
fn statusctl(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("statusctl"));
    cmd.env("HOME", home.path())
        .env_remove("STATUSCTL_BASE_URL")
        .env_remove("STATUSCTL_STATUS_PREFIX")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("statusctl"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("restart-workers"))
        .stdout(predicate::str::contains("playlist"));
}

#[test]
fn test_no_args_shows_info() {
    let home = TempDir::new().unwrap();
    statusctl(&home).assert().success().stdout(predicate::str::contains("statusctl v"));
}

// =============================================================================
// ADMIN ACTIONS
// =============================================================================

#[test]
fn test_disconnect_success() {
    let home = TempDir::new().unwrap();
    let server = MockServer::respond_once(200, "{}");

    statusctl(&home)
        .args(["--base-url", server.base_url(), "disconnect", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disconnected client abc"));

    let request = server.finish();
    assert_eq!(request.path, "/api/disconnect");
    assert_eq!(request.body, "client_id=abc");
}

#[test]
fn test_disconnect_failure_reports_server_error() {
    let home = TempDir::new().unwrap();
    let server = MockServer::respond_once(404, r#"{"error":"Client not found"}"#);

    statusctl(&home)
        .args(["--base-url", server.base_url(), "disconnect", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Client not found"));

    server.finish();
}

#[test]
fn test_log_level_failure_uses_status_message() {
    let home = TempDir::new().unwrap();
    let server = MockServer::respond_once(400, r#"{"error":"invalid level"}"#);

    statusctl(&home)
        .args(["--base-url", server.base_url(), "log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed with status 400"))
        .stderr(predicate::str::contains("invalid level").not());

    server.finish();
}

#[test]
fn test_base_url_from_env_and_json_output() {
    let home = TempDir::new().unwrap();
    let server = MockServer::respond_once(200, "");

    let output = statusctl(&home)
        .env("STATUSCTL_BASE_URL", server.base_url())
        .args(["--json", "restart-workers"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Workers restarted");
    assert_eq!(server.finish().path, "/api/restart-workers");
}

#[test]
fn test_status_prefix_from_config_file() {
    let home = TempDir::new().unwrap();
    let server = MockServer::respond_once(200, "{}");

    statusctl(&home).args(["config", "set", "status_prefix", "/status"]).assert().success();
    statusctl(&home)
        .args(["--base-url", server.base_url(), "clear-logs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logs cleared"));

    assert_eq!(server.finish().path, "/status/api/clear-logs");
}

#[test]
fn test_invalid_base_url_fails() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .args(["--base-url", "ftp://example.com", "reload-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base URL"));
}

// =============================================================================
// PLAYLIST AND CONFIG
// =============================================================================

#[test]
fn test_playlist_url() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .args(["--base-url", "http://radio.local:8080/proxy", "playlist", "url"])
        .assert()
        .success()
        .stdout("http://radio.local:8080/proxy/playlist.m3u\n");
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();

    statusctl(&home)
        .args(["config", "set", "base_url", "http://10.1.2.3:8000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set base_url"));

    assert!(home.path().join(".statusctl/config.toml").exists());

    statusctl(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = http://10.1.2.3:8000"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .args(["config", "set", "color", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_config_set_keeps_unparsable_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".statusctl");
    std::fs::create_dir_all(&dir).unwrap();
    let broken = "base_url = [hand edited\n";
    std::fs::write(dir.join("config.toml"), broken).unwrap();

    statusctl(&home)
        .args(["config", "set", "status_prefix", "/status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));

    assert_eq!(std::fs::read_to_string(dir.join("config.toml")).unwrap(), broken);
}

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    statusctl(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
