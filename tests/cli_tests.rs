//! CLI smoke tests against a throwaway console home.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn console(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mint-console").unwrap();
    cmd.arg("--home").arg(home.path());
    cmd
}

#[test]
fn test_status_on_fresh_home() {
    let home = TempDir::new().unwrap();
    console(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming Soon"))
        .stdout(predicate::str::contains("not-open"));
}

#[test]
fn test_phase_set_then_status_json() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["phase", "set", "public-sale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public-sale"));

    let output = console(&home)
        .args(["status", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["phase"], "public_sale");
    assert_eq!(json["label"], "Public Sale");
    assert_eq!(json["max_per_wallet"], 5);
}

#[test]
fn test_connect_mint_and_supply_moves() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["phase", "set", "public-sale"])
        .assert()
        .success();

    console(&home)
        .arg("connect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected"));

    console(&home)
        .args(["mint", "--quantity", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minted 2 token(s)"))
        .stdout(predicate::str::contains("Supply now 2 / 10000"));

    // The session was remembered; the wallet's count survives reconnection
    console(&home)
        .arg("wallet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minted: 2"));
}

#[test]
fn test_mint_without_wallet_fails() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["phase", "set", "public-sale"])
        .assert()
        .success();

    console(&home)
        .args(["mint", "--quantity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connect a wallet before minting"));
}

#[test]
fn test_mint_while_paused_fails() {
    let home = TempDir::new().unwrap();
    console(&home).args(["phase", "pause"]).assert().success();
    console(&home).arg("connect").assert().success();

    console(&home)
        .args(["mint", "--quantity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The sale is not open"));
}

#[test]
fn test_settings_round_trip() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["settings", "get", "minting-status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coming Soon"));

    console(&home)
        .args(["settings", "set", "minting-status", "Opens Friday"])
        .assert()
        .success();

    console(&home)
        .args(["settings", "get", "minting-status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opens Friday"));

    // The closed-sale status label follows the setting
    console(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opens Friday"));
}

#[test]
fn test_subscribe_requires_wallet_then_succeeds() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["settings", "set", "download-link", "https://example.com/book.pdf"])
        .assert()
        .success();

    console(&home)
        .args(["subscribers", "add", "reader@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connect your wallet"));

    console(&home).arg("connect").assert().success();

    console(&home)
        .args(["subscribers", "add", "reader@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/book.pdf"));

    console(&home)
        .args(["subscribers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reader@example.com"));
}

#[test]
fn test_clean_removes_state() {
    let home = TempDir::new().unwrap();
    console(&home)
        .args(["phase", "set", "whitelist"])
        .assert()
        .success();

    console(&home)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    console(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not-open"));
}
