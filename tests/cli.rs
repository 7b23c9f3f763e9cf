//! Integration tests for the `marginwrap` command-line interface.
//!
//! Covers reading standard input, wrapping several files in order, in-place
//! rewriting, terminator escapes and rejection of invalid layouts.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

const SENTENCE: &str = "one two three four five six seven eight nine ten";

#[test]
fn test_cli_version_flag() {
    Command::cargo_bin("marginwrap")
        .expect("failed to create cargo command for marginwrap")
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("marginwrap {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_in_place_requires_file() {
    Command::cargo_bin("marginwrap")
        .expect("failed to create cargo command for marginwrap")
        .arg("--in-place")
        .assert()
        .failure();
}

#[test]
fn test_cli_wraps_stdin_with_margins() {
    run_cli_with_stdin(
        &["--width", "20", "--left", "> ", "--right", " <"],
        &format!("{SENTENCE}\n"),
    )
    .success()
    .stdout("> one two three <\n> four five six <\n> seven eight <\n> nine ten <\n");
}

#[test]
fn test_cli_output_fits_width() {
    let assertion = run_cli_with_stdin(&["--width", "30"], &format!("{SENTENCE} {SENTENCE}\n"))
        .success();
    let text = String::from_utf8_lossy(&assertion.get_output().stdout).into_owned();
    assert!(text.lines().count() > 1, "expected wrapped output on multiple lines");
    assert_lines_fit(&text, 30);
}

#[rstest]
#[case(r"\r\n", "a\r\nb\r\n")]
#[case("|", "a|b|")]
fn test_cli_terminator_escapes(#[case] terminator: &str, #[case] expected: &str) {
    run_cli_with_stdin(&["--terminator", terminator], "a\nb\n")
        .success()
        .stdout(expected.to_string());
}

#[test]
fn test_cli_no_wrap_keeps_long_lines() {
    let long = "word ".repeat(30);
    let long = long.trim_end();
    run_cli_with_stdin(&["--width", "20", "--no-wrap"], &format!("{long}\n"))
        .success()
        .stdout(format!("{long}\n"));
}

#[test]
fn test_cli_rejects_narrow_layout() {
    run_cli_with_stdin(&["--width", "6", "--left", "abc"], "text\n")
        .failure()
        .stderr(predicate::str::contains("invalid line layout"));
}

#[test]
fn test_cli_files_print_in_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut paths = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("file{i}.txt"));
        fs::write(&path, format!("file {i} {SENTENCE}\n")).expect("failed to write file");
        expected.push_str(&format!("- file {i} one two three four\n- five six seven eight nine\n- ten\n"));
        paths.push(path);
    }

    Command::cargo_bin("marginwrap")
        .expect("failed to create cargo command for marginwrap")
        .args(["--width", "30", "--left", "- "])
        .args(&paths)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_in_place_rewrites_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "alpha beta gamma delta\n").expect("failed to write file");

    Command::cargo_bin("marginwrap")
        .expect("failed to create cargo command for marginwrap")
        .args(["--in-place", "--width", "14", "--left", "| "])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let out = fs::read_to_string(&path).expect("failed to read file");
    assert_eq!(out, "| alpha beta\n| gamma delta\n");
}
