// Regression tests: the CLI front end must validate input, render miette
// diagnostics, and write exactly the text the library assembles.
// Requires: assert_cmd, predicates, tempfile in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use chibagen::generator::assemble;
use chibagen::{InputContext, SourceContext};

fn chibagen() -> Command {
    Command::cargo_bin("chibagen").unwrap()
}

fn expected_header(max_count: i64) -> String {
    let ctx = InputContext::new(SourceContext::from_input(max_count.to_string()));
    assemble(max_count, &ctx).unwrap()
}

#[test]
fn show_prints_the_assembled_header() {
    let output = chibagen()
        .args(["show", "--count", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap(), expected_header(2));
}

#[test]
fn generate_writes_the_same_bytes_show_prints() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chiba_utils_refl_impl.h");

    chibagen()
        .args(["generate", "--count", "3", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Generated"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, expected_header(3));
}

#[test]
fn generate_prompts_on_stdin_when_count_is_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.h");

    chibagen()
        .args(["generate", "--output"])
        .arg(&path)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(contains("Maximum field count"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), expected_header(4));
}

#[test]
fn out_of_range_count_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    for bad in ["0", "257"] {
        let path = dir.path().join(format!("out_{bad}.h"));
        chibagen()
            .args(["generate", "--count", bad, "--output"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(contains("chibagen::input::count_out_of_range").and(contains("out of range")));
        assert!(!path.exists(), "no file may be written for count {bad}");
    }
}

#[test]
fn non_numeric_prompt_input_is_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.h");

    chibagen()
        .args(["generate", "--output"])
        .arg(&path)
        .write_stdin("eight\n")
        .assert()
        .failure()
        .stderr(contains("not an integer"));
    assert!(!path.exists());
}

#[test]
fn unwritable_output_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.h");

    chibagen()
        .args(["generate", "--count", "5", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("failed to write header"));
}

#[test]
fn show_is_deterministic_across_runs() {
    let first = chibagen()
        .args(["show", "--count", "6"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = chibagen()
        .args(["show", "--count", "6"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}
