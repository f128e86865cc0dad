use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn stencil() -> Command {
    Command::cargo_bin("stencil").expect("stencil binary builds")
}

#[test]
fn renders_envelope_from_stdin() {
    stencil()
        .write_stdin(r#"{"templateSource":"Hi {{#if name}}{{name}}{{/if}}!","data":{"name":"Sam"}}"#)
        .assert()
        .success()
        .stdout(r#"{"content":"Hi Sam!"}"#);
}

#[test]
fn empty_data_collapses_conditional() {
    stencil()
        .write_stdin(r#"{"templateSource":"Hi {{#if name}}{{name}}{{/if}}!","data":{}}"#)
        .assert()
        .success()
        .stdout(r#"{"content":"Hi !"}"#);
}

#[test]
fn empty_envelope_renders_empty_content() {
    stencil()
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(r#"{"content":""}"#);
}

#[test]
fn frontmatter_vars_are_overridden_by_data() {
    stencil()
        .write_stdin(r#"{"templateSource":"{{x}}","data":{"x":"A"},"frontmatter":{"vars":{"x":"B"}}}"#)
        .assert()
        .success()
        .stdout(r#"{"content":"A"}"#);
}

#[test]
fn non_object_data_is_tolerated() {
    stencil()
        .write_stdin(r#"{"templateSource":"[{{x}}]","data":"not a mapping"}"#)
        .assert()
        .success()
        .stdout(r#"{"content":"[]"}"#);
}

#[test]
fn non_ascii_is_preserved_unescaped() {
    stencil()
        .write_stdin(r#"{"templateSource":"héllo {{name}}","data":{"name":"wörld"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("héllo wörld"));
}

#[test]
fn malformed_json_exits_nonzero() {
    stencil()
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request envelope"));
}

#[test]
fn input_flag_reads_envelope_from_file() {
    let mut envelope = tempfile::NamedTempFile::new().expect("temp file");
    envelope
        .write_all(br#"{"templateSource":"Hi {{name}}!","data":{"name":"Sam"}}"#)
        .expect("write envelope");

    stencil()
        .arg("--input")
        .arg(envelope.path())
        .assert()
        .success()
        .stdout(r#"{"content":"Hi Sam!"}"#);
}

#[test]
fn missing_input_file_exits_nonzero() {
    stencil()
        .arg("--input")
        .arg("/nonexistent/envelope.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open request envelope"));
}

#[test]
fn pretty_output_is_valid_json_with_same_content() {
    let assert = stencil()
        .arg("--pretty")
        .write_stdin(r#"{"templateSource":"Hi {{name}}!","data":{"name":"Sam"}}"#)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["content"], "Hi Sam!");
}

#[test]
fn unterminated_block_reports_diagnostics() {
    let assert = stencil()
        .write_stdin(r#"{"templateSource":"{{#if a}}X","data":{"a":1}}"#)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["content"], "{{#if a}}X");
    let diags = parsed["diagnostics"].as_array().expect("diagnostics array");
    assert_eq!(diags.len(), 1);
}
