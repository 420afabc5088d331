use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

const OWNER: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const TOKEN_ADDRESS: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

const FLAGS: &[&str] = &[
    "setup",
    "--project-type",
    "supertoken",
    "--project-name",
    "blast",
    "--owner",
    OWNER,
    "--hook",
    "limit-hook",
    "--network",
    "mainnet",
    "--new-token-name",
    "Blast LooksRare Token",
    "--new-token-symbol",
    "bLOOKS",
    "--new-token-decimals",
    "18",
    "--new-token-chain",
    "BLAST",
    "--new-token-address",
    TOKEN_ADDRESS,
    "--vault-chains",
    "MAINNET",
    "--controller-chains",
    "BLAST",
    "--tokens",
    "bLOOKS",
    "--limit",
    "bLOOKS=10000000:10000000",
];

fn plugs(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plugs").unwrap();
    cmd.arg("--output-dir").arg(temp_dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn a_fully_flagged_setup_writes_every_artifact() {
    let temp_dir = TempDir::new().unwrap();

    plugs(&temp_dir)
        .args(FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "script/constants/projectConstants/supertoken/blast.ts",
        ));

    temp_dir
        .child("src/enums/registry.json")
        .assert(predicate::str::contains("bLOOKS"));
    temp_dir.child(".env").assert(
        predicate::str::contains(OWNER)
            .and(predicate::str::contains("MAINNET_RPC"))
            .and(predicate::str::contains("BLAST_RPC")),
    );
    temp_dir
        .child("script/constants/projectConstants/supertoken/blast.ts")
        .assert(predicate::str::contains("10000000"));
    temp_dir
        .child("src/enums/existing-token-addresses.json")
        .assert(predicate::str::contains(TOKEN_ADDRESS));
}

#[test]
fn a_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let result = plugs(&temp_dir)
        .args(FLAGS)
        .args(["--dry-run", "--format", "json"])
        .assert()
        .success();

    let output: Value = serde_json::from_slice(&result.get_output().stdout).unwrap();
    assert_eq!(output["data"]["success"], true);
    assert_eq!(output["data"]["dry_run"], true);
    assert_eq!(output["data"]["artifacts"].as_array().unwrap().len(), 4);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_preset_chains_fail_with_a_code() {
    let temp_dir = TempDir::new().unwrap();

    let result = plugs(&temp_dir)
        .args([
            "setup",
            "--project-type",
            "superbridge",
            "--project-name",
            "bridge",
            "--owner",
            OWNER,
            "--hook",
            "no-hook",
            "--network",
            "mainnet",
            "--new-token",
            "false",
            "--vault-chains",
            "MAINNET",
            "--controller-chains",
            "BLAST,ARBITRUM",
            "--format",
            "json",
        ])
        .assert()
        .failure();

    let output: Value = serde_json::from_slice(&result.get_output().stdout).unwrap();
    assert_eq!(output["data"]["success"], false);
    assert_eq!(output["error"]["code"], "E001");
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn it_rejects_unchecksummed_owners() {
    let temp_dir = TempDir::new().unwrap();

    plugs(&temp_dir)
        .args(["setup", "--owner", "0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--owner"));
}
