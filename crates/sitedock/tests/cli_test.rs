use assert_cmd::Command;
use predicates::prelude::*;

/// The help text lists every provisioning option
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sitedock").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bucket"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--index-document"))
        .stdout(predicate::str::contains("--error-document"))
        .stdout(predicate::str::contains("--origin-access-identity"));
}

/// The version flag reports the package version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sitedock").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sitedock"));
}

/// Unknown flags fail before any provider call is made
#[test]
fn test_unknown_flag_fails() {
    let mut cmd = Command::cargo_bin("sitedock").unwrap();
    cmd.arg("--no-such-flag").assert().failure();
}
