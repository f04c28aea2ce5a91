//! CLI integration tests for the demo/show/eval subcommands.
//!
//! Uses `assert_cmd` to spawn the `reprise` binary and verify exit
//! codes, stdout content, and stderr content. File-based subcommands
//! work against fixture trees written into a temp directory.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reprise() -> Command {
    cargo_bin_cmd!("reprise")
}

const AFFINE_TREE: &str = r#"{
  "kind": "lam",
  "param": "x0",
  "body": {
    "kind": "op_app",
    "op": "plus",
    "args": [
      {
        "kind": "op_app",
        "op": "times",
        "args": [
          {"kind": "var", "name": "x0"},
          {"kind": "lit", "value": {"kind": "int", "value": 5}}
        ]
      },
      {"kind": "lit", "value": {"kind": "int", "value": 6}}
    ]
  }
}"#;

const INT_TO_INT: &str = r#"{"kind": "func", "arg": {"kind": "int"}, "result": {"kind": "int"}}"#;

/// Write a fixture tree into a fresh temp dir, returning both so the
/// dir outlives the test body.
fn fixture(contents: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tree.json");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    reprise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Typed expression recording and reconstruction",
        ));
}

#[test]
fn version_exits_0() {
    reprise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reprise"));
}

// ──────────────────────────────────────────────
// 2. Demo subcommand
// ──────────────────────────────────────────────

#[test]
fn demo_prints_interchange_json() {
    reprise()
        .args(["demo", "affine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"lam\""))
        .stdout(predicate::str::contains("\"op\": \"plus\""));
}

#[test]
fn demo_rejects_unknown_names() {
    reprise()
        .args(["demo", "no-such-demo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown demo"));
}

// ──────────────────────────────────────────────
// 3. Show subcommand
// ──────────────────────────────────────────────

#[test]
fn show_renders_tree_and_variable_census() {
    let (_tmp, path) = fixture(AFFINE_TREE);
    reprise()
        .args(["show", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("(lam x0 (plus (times x0 5) 6))"))
        .stdout(predicate::str::contains("variables: x0"));
}

#[test]
fn show_rejects_malformed_trees() {
    let (_tmp, path) = fixture(r#"{"kind": "no_such_kind"}"#);
    reprise()
        .args(["show", &path])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed expression tree"));
}

#[test]
fn show_missing_file_exits_1() {
    reprise()
        .args(["show", "nonexistent_tree_xyz.json"])
        .assert()
        .failure()
        .code(1);
}

// ──────────────────────────────────────────────
// 4. Eval subcommand
// ──────────────────────────────────────────────

#[test]
fn eval_applies_arguments() {
    let (_tmp, path) = fixture(AFFINE_TREE);
    reprise()
        .args(["eval", &path, "--type", INT_TO_INT, "--arg", "2"])
        .assert()
        .success()
        .stdout("16\n");
}

#[test]
fn eval_without_arguments_prints_the_function_placeholder() {
    let (_tmp, path) = fixture(AFFINE_TREE);
    reprise()
        .args(["eval", &path, "--type", INT_TO_INT])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"function\""));
}

#[test]
fn eval_surfaces_reconstruction_errors() {
    let (_tmp, path) = fixture(r#"{"kind": "var", "name": "y"}"#);
    reprise()
        .args(["eval", &path, "--type", r#"{"kind": "int"}"#])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unbound variable: y"));
}

#[test]
fn eval_rejects_bad_type_descriptors() {
    let (_tmp, path) = fixture(AFFINE_TREE);
    reprise()
        .args(["eval", &path, "--type", r#"{"kind": "decimal"}"#])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a type descriptor"));
}
