use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn extracts_with_explicit_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, r#"{"zero": {"prefix": "\\zero", "body": ["0"]}}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully extracted 1 snippets"))
        .stdout(predicate::str::contains("Warning").not());

    assert_eq!(read_json(&output), json!({ "\\<zero>": "0" }));
}

#[test]
fn defaults_resolve_against_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("snippets.json"),
        r#"{"foo": {"prefix": "foo", "body": "bar"}}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.current_dir(dir.path());

    cmd.assert().success().stdout(predicate::str::contains(
        "Successfully extracted 1 snippets to 'snippets_extracted.json'.",
    ));

    let output = dir.path().join("snippets_extracted.json");
    assert_eq!(read_json(&output), json!({ "\\<foo>": "bar" }));
}

#[test]
fn only_input_given_uses_default_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("custom.json"),
        r#"{"a": {"prefix": ["\\alpha", "\\beta"], "body": "α"}}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.current_dir(dir.path()).arg("custom.json");
    cmd.assert().success();

    let text = fs::read_to_string(dir.path().join("snippets_extracted.json")).unwrap();
    assert!(text.contains("\"α\""), "non-ASCII should be written literally: {text}");
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({ "\\<alpha>": "α" })
    );
}

#[test]
fn duplicate_keys_warn_and_keep_last_body() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(
        &input,
        r#"{
            "first": {"prefix": "\\dup", "body": "first"},
            "second": {"prefix": "dup", "body": "second"}
        }"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully extracted 1 snippets"))
        .stdout(predicate::str::contains(
            "Warning: 1 duplicate keys encountered (last write wins). Examples: \\<dup>",
        ));

    assert_eq!(read_json(&output), json!({ "\\<dup>": "second" }));
}

#[test]
fn missing_input_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(dir.path().join("missing.json")).arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input file '"))
        .stderr(predicate::str::contains("not found."));

    assert!(!output.exists());
}

#[test]
fn malformed_input_exits_with_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, "{\"zero\": {\"prefix\": ").unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to parse JSON from '"));

    assert!(!output.exists());
}

#[test]
fn top_level_array_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, r#"[{"prefix": "\\zero"}]"#).unwrap();

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected an object of snippet definitions"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_exits_with_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, r#"{"zero": {"prefix": "\\zero", "body": "0"}}"#).unwrap();
    let output = dir.path().join("missing-dir").join("out.json");

    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to write to '"));
}

#[test]
fn extra_positional_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("extract-snippets");
    cmd.arg("a.json").arg("b.json").arg("c.json");
    cmd.assert().failure().code(2);
}
