//! CLI tests for the `grader` binary.
//!
//! Spawns the binary against temporary fixtures and verifies stdout and exit
//! codes for successful, missing-input, parse and fetch failure runs.

use std::process::{Command, Output};

use grader::exit_codes;
use grader::test_support::Fixture;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Fixture</title></head>
  <body>
    <h1>Heading</h1>
    <p>Body text</p>
  </body>
</html>"#;

fn grader(fixture: &Fixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grader"))
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run grader")
}

#[test]
fn defaults_check_index_html_against_checks_json() {
    let fixture = Fixture::new(r#"["p", "a", "h1"]"#, PAGE).expect("fixture");

    let output = grader(&fixture, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "{\n    \"a\": false,\n    \"h1\": true,\n    \"p\": true\n}\n"
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let fixture = Fixture::new(r#"["title", "body > p", "footer", "p"]"#, PAGE).expect("fixture");

    let first = grader(&fixture, &["-c", "checks.json", "-f", "index.html"]);
    let second = grader(&fixture, &["--checks", "checks.json", "--file", "index.html"]);

    assert_eq!(first.status.code(), Some(exit_codes::OK));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_checks_file_exits_one_without_report() {
    let fixture = Fixture::new("[]", PAGE).expect("fixture");

    let output = grader(&fixture, &["--checks", "absent.json"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("absent.json does not exist. Exiting."));
}

#[test]
fn missing_html_file_exits_one_without_report() {
    let fixture = Fixture::new(r#"["p"]"#, PAGE).expect("fixture");

    let output = grader(&fixture, &["--file", "absent.html"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_checks_json_exits_with_parse_code() {
    let fixture = Fixture::new("[\"p\",", PAGE).expect("fixture");

    let output = grader(&fixture, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::PARSE));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_selector_exits_with_parse_code() {
    let fixture = Fixture::new(r#"["p", "[[["]"#, PAGE).expect("fixture");

    let output = grader(&fixture, &[]);

    assert_eq!(output.status.code(), Some(exit_codes::PARSE));
    assert!(output.stdout.is_empty());
}

#[test]
fn unfetchable_url_exits_with_fetch_code() {
    let fixture = Fixture::new(r#"["p"]"#, PAGE).expect("fixture");

    let output = grader(&fixture, &["--file", "index.html", "--url", "not a url"]);

    assert_eq!(output.status.code(), Some(exit_codes::FETCH_FAILED));
    assert!(output.stdout.is_empty());
}
