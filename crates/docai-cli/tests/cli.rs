//! Integration tests for the docai binary.

use assert_cmd::Command;
use predicates::prelude::*;

const REQUIRED_VARS: [&str; 5] = [
    "INPUT_FOLDER",
    "PROJECT_ID",
    "LOCATION",
    "PROCESSOR_ID",
    "DOCAI_ACCESS_TOKEN",
];

fn docai() -> Command {
    let mut cmd = Command::cargo_bin("docai").unwrap();
    for var in REQUIRED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_subcommands() {
    docai()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("process"));
}

#[test]
fn run_without_environment_fails_before_processing() {
    docai()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT_FOLDER"));
}

#[test]
fn process_without_environment_fails_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("invoice.pdf");
    std::fs::write(&pdf, b"%PDF-1.4").unwrap();

    docai()
        .arg("process")
        .arg(&pdf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required environment variable"));
}

#[test]
fn process_reports_missing_input_file() {
    docai()
        .arg("process")
        .arg("absent.pdf")
        .env("INPUT_FOLDER", "unused")
        .env("PROJECT_ID", "acme-billing")
        .env("LOCATION", "eu")
        .env("PROCESSOR_ID", "p1")
        .env("DOCAI_ACCESS_TOKEN", "token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
