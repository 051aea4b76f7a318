//! Integration tests for binding introspection and CLI metadata.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::run_repl;

fn rawline() -> Command {
    Command::cargo_bin("rawline").expect("binary exists")
}

// ============================================================================
// Binding Listing Tests
// ============================================================================

#[test]
fn bindings_flag_lists_notation_and_description() {
    rawline()
        .arg("--bindings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Key Bindings:"))
        .stdout(predicate::str::contains("C-k"))
        .stdout(predicate::str::contains("Kill to end of line"))
        .stdout(predicate::str::contains("M-f"));
}

#[test]
fn bindings_listing_skips_the_repl() {
    rawline()
        .arg("--bindings")
        .assert()
        .success()
        .stdout(predicate::str::contains("rawline REPL").not());
}

#[test]
fn bindings_json_is_parseable() {
    let (stdout, _stderr, exit_code) = run_repl(&["--bindings-json"], b"");
    assert_eq!(exit_code, 0);

    let bindings: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = bindings.as_array().expect("JSON array");
    assert_eq!(entries.len(), 32);
    assert!(entries
        .iter()
        .any(|entry| entry["notation"] == "C-y" && entry["action"] == "yank"));
}

#[test]
fn bindings_flags_conflict() {
    rawline()
        .args(["--bindings", "--bindings-json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// CLI Metadata Tests
// ============================================================================

#[test]
fn version_flag_reports_the_crate_version() {
    rawline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_the_editing_flags() {
    rawline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--no-pairing"))
        .stdout(predicate::str::contains("--angle-pairs"))
        .stdout(predicate::str::contains("--bindings"));
}

#[test]
fn unknown_flag_is_rejected() {
    rawline()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
