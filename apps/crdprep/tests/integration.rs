//! Integration tests for the crdprep CLI

use std::process::Command;

fn crdprep() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crdprep"));
    for var in [
        "CRDPREP_DATA_DIR",
        "CRDPREP_CRDS_URL",
        "CRDPREP_DOWNLOAD_POLICY",
        "CRDPREP_NETWORK_TIMEOUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_version() {
    let output = crdprep()
        .arg("--version")
        .output()
        .expect("Failed to execute crdprep");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("crdprep"));
}

#[test]
fn test_cli_help() {
    let output = crdprep()
        .arg("--help")
        .output()
        .expect("Failed to execute crdprep");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("prepare"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("clean"));
}

#[test]
fn test_path_prints_hashed_entry() {
    let output = crdprep()
        .args([
            "path",
            "--url",
            "https://example.com/crds.tar.gz",
            "--data-dir",
            "/data",
        ])
        .output()
        .expect("Failed to execute crdprep");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "/data/cache/bd0106e2b1c896569e78fd48b65bdc3541a2b1487ac582aa545d80631d8d7337"
    );
}

#[test]
fn test_missing_url_is_a_config_error() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[paths]\ndata_dir = \"/data\"\n").unwrap();

    let output = crdprep()
        .arg("--config")
        .arg(&config)
        .arg("path")
        .output()
        .expect("Failed to execute crdprep");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crds.remote_url"));
}

#[test]
fn test_status_and_clean_on_empty_cache() {
    let temp = tempfile::tempdir().unwrap();
    let data_dir = temp.path().to_str().unwrap();

    let status = crdprep()
        .args([
            "--json",
            "status",
            "--url",
            "https://example.com/crds.tar.gz",
            "--data-dir",
            data_dir,
        ])
        .output()
        .expect("Failed to execute crdprep");
    assert!(status.status.success());
    let json: serde_json::Value = serde_json::from_slice(&status.stdout).unwrap();
    assert_eq!(json["exists"], false);

    let clean = crdprep()
        .args([
            "--json",
            "clean",
            "--url",
            "https://example.com/crds.tar.gz",
            "--data-dir",
            data_dir,
        ])
        .output()
        .expect("Failed to execute crdprep");
    assert!(clean.status.success());
    let json: serde_json::Value = serde_json::from_slice(&clean.stdout).unwrap();
    assert_eq!(json["removed"], false);
}

#[test]
fn test_invalid_policy_is_rejected() {
    let output = crdprep()
        .args([
            "prepare",
            "--url",
            "https://example.com/crds.tar.gz",
            "--policy",
            "sometimes",
        ])
        .output()
        .expect("Failed to execute crdprep");

    assert!(!output.status.success());
}
