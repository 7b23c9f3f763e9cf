//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros)]

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Run the `marginwrap` binary with `args`, feeding `input` on stdin.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> assert_cmd::assert::Assert {
    assert_cmd::Command::cargo_bin("marginwrap")
        .expect("failed to create cargo command for marginwrap")
        .args(args)
        .write_stdin(input)
        .assert()
}

/// Lines of `out`, without the terminator that closes the last one.
pub fn output_lines(out: &str) -> Vec<&str> {
    assert!(out.ends_with('\n'), "output is not terminated: {out:?}");
    out[..out.len() - 1].split('\n').collect()
}

/// Assert every line of `out` fits in `max` columns, counting the terminator.
pub fn assert_lines_fit(out: &str, max: usize) {
    for line in output_lines(out) {
        assert!(
            line.chars().count() < max,
            "line {line:?} exceeds {max} columns"
        );
    }
}
