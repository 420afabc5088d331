use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn it_lists_the_builtin_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("plugs").unwrap();
    let result = cmd
        .arg("tokens")
        .arg("--output-dir")
        .arg(temp_dir.path())
        .env("NO_COLOR", "1")
        .assert();
    result
        .success()
        .stdout(predicate::str::contains("USDC.e").and(predicate::str::contains("LOOKS")));
}

#[test]
fn it_lists_testnet_chains_only() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("plugs").unwrap();
    let result = cmd
        .args(["chains", "--network", "testnet", "--format", "json"])
        .env("PLUGS_OUTPUT_DIR", temp_dir.path())
        .assert()
        .success();

    let output: Value = serde_json::from_slice(&result.get_output().stdout).unwrap();
    assert_eq!(output["json_version"], "1");
    assert_eq!(output["data"]["success"], true);
    let chains = output["data"]["chains"].as_array().unwrap();
    assert!(!chains.is_empty());
    assert!(chains.iter().all(|chain| chain["network"] == "testnet"));
    assert!(chains.iter().any(|chain| chain["key"] == "SEPOLIA"));
}

#[test]
fn it_explains_error_codes() {
    let mut cmd = Command::cargo_bin("plugs").unwrap();
    cmd.args(["explain", "E001"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("E001"));
}

#[test]
fn it_rejects_unknown_error_codes() {
    let mut cmd = Command::cargo_bin("plugs").unwrap();
    cmd.args(["explain", "E999"]).assert().failure();
}
