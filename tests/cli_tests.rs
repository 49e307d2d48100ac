use std::fs;
use std::path::Path;

use assert_cmd::Command;
use objpath::logging::ensure_test_logging;
use predicates::prelude::*;
use serde_json::{json, Value};
use tracing::info;

fn objpath() -> Command {
    Command::cargo_bin("objpath").unwrap()
}

fn write_script(dir: &Path, source: &str) -> String {
    let path = dir.join("demo.py");
    fs::write(&path, source).unwrap();
    path.display().to_string()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is a single JSON document")
}

fn child_expressions(node: &Value) -> Vec<String> {
    node["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["expr"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help_command() {
    ensure_test_logging();
    info!("Testing CLI help command");
    objpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore the structure"));
}

#[test]
fn test_markdown_help() {
    ensure_test_logging();
    objpath()
        .arg("--markdown-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("objpath"))
        .stdout(predicate::str::contains("--max-depth"));
}

#[test]
fn test_missing_arguments() {
    ensure_test_logging();
    objpath()
        .arg("demo.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_positive_line_is_rejected() {
    ensure_test_logging();
    objpath().args(["demo.py", "0", "x"]).assert().failure();
}

#[test]
fn test_nested_structure_is_printed() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(
        dir.path(),
        "x = {'a': [1, 2], 'b': {'c': 3}}\nprint('done')\n",
    );

    let report = stdout_json(objpath().args([file.as_str(), "2", "x"]));
    assert_eq!(report["expr"], json!("x"));
    assert_eq!(report["type"], json!("dict"));
    assert_eq!(child_expressions(&report), vec!["x['a']", "x['b']"]);
    assert_eq!(
        child_expressions(&report["children"][0]),
        vec!["x['a'][0]", "x['a'][1]"]
    );
    assert!(report.get("error").is_none());
    assert!(report.get("patterns").is_none());
}

#[test]
fn test_program_output_goes_to_stderr() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(dir.path(), "print('hello from the script')\nvalue = [1]\n");

    let assert = objpath()
        .args([file.as_str(), "2", "value", "--compact"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hello from the script"))
        .stdout(predicate::str::contains("hello from the script").not());
    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["type"], json!("list"));
}

#[test]
fn test_variable_not_found() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(dir.path(), "a = 1\n");

    objpath()
        .args([file.as_str(), "1", "nope", "--compact"])
        .assert()
        .success()
        .stdout("{\"error\":\"Variable 'nope' not found\"}\n");
}

#[test]
fn test_execution_failure() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(dir.path(), "a = 1\nb = a / 0\n");

    let report = stdout_json(objpath().args([file.as_str(), "2", "a"]));
    assert_eq!(report, json!({"error": "Execution failed: division by zero"}));
}

#[test]
fn test_missing_file_still_prints_json() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.py").display().to_string();

    let report = stdout_json(objpath().args([missing.as_str(), "1", "x"]));
    assert!(report["error"]
        .as_str()
        .unwrap()
        .starts_with("Execution failed: "));
}

#[test]
fn test_config_file_and_flag_precedence() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("objpath.toml"), "[walk]\nmax_items = 1\n").unwrap();
    let file = write_script(dir.path(), "xs = [10, 20, 30]\n");

    let report = stdout_json(objpath().args([file.as_str(), "1", "xs"]));
    assert_eq!(child_expressions(&report), vec!["xs[0]"]);

    let report = stdout_json(objpath().args([file.as_str(), "1", "xs", "--max-items", "2"]));
    assert_eq!(child_expressions(&report), vec!["xs[0]", "xs[1]"]);
}

#[test]
fn test_invalid_config_is_reported_as_json() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[walk]\nmax_items = 'many'\n").unwrap();
    let file = write_script(dir.path(), "xs = [1]\n");

    let report = stdout_json(objpath().args([
        file.as_str(),
        "1",
        "xs",
        "--config",
        config.to_str().unwrap(),
    ]));
    assert!(report["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid configuration: "));
}

#[test]
fn test_patterns_flag() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(
        dir.path(),
        "class Grid:\n    shape = (4,)\n    dtype = 'float64'\n\ngrid = Grid()\n",
    );

    let report = stdout_json(objpath().args([file.as_str(), "5", "grid", "--patterns"]));
    assert_eq!(
        report["patterns"],
        json!(["arr.shape  # (4,)", "arr.dtype  # float64", "arr[0]"])
    );
}

#[test]
fn test_zero_depth() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(dir.path(), "data = {'k': [1, 2, 3]}\n");

    let report = stdout_json(objpath().args([file.as_str(), "1", "data", "--max-depth", "0"]));
    assert_eq!(report["children"], json!([]));
    assert_eq!(report["preview"], json!("..."));
}

#[test]
fn test_output_from_property_access_goes_to_stderr() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(
        dir.path(),
        "class Counter:\n    @property\n    def total(self):\n        print('side effect')\n        return 3\n\nc = Counter()\n",
    );

    let assert = objpath()
        .args([file.as_str(), "7", "c", "--compact", "--patterns"])
        .assert()
        .success()
        .stderr(predicate::str::contains("side effect"))
        .stdout(predicate::str::contains("side effect").not());
    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(child_expressions(&report), vec!["c.total"]);
    assert_eq!(report["children"][0]["preview"], json!("3"));
}

#[test]
fn test_deep_chain_is_cut_off_at_the_depth_ceiling() {
    ensure_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let file = write_script(
        dir.path(),
        "class Link:\n    def __init__(self, nxt):\n        self.nxt = nxt\n\nhead = None\nfor _ in range(5000):\n    head = Link(head)\n",
    );

    let output = objpath()
        .args([file.as_str(), "7", "head", "--max-depth", "100000", "--compact"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    // Too deeply nested for serde_json's default recursion limit, so count nodes.
    assert_eq!(
        text.matches("\"expr\":").count(),
        objpath::analysis::MAX_WALK_DEPTH + 1
    );
    assert!(text.starts_with("{\"expr\":\"head\""));
    assert!(text.trim_end().ends_with('}'));
    assert!(text.contains("\"preview\":\"...\""));
}
