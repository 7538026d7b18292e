//! Integration tests for the colorpicker binary
//!
//! Only paths that end before a dialog is shown are exercised here:
//! argument errors, usage errors, help and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn colorpicker() -> Command {
    Command::cargo_bin("colorpicker").expect("binary should be built")
}

#[test]
fn test_non_hex_argument_fails_without_output() {
    colorpicker()
        .arg("#GG0000")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("red channel \"GG\" is not hexadecimal"));
}

#[test]
fn test_seven_digit_argument_fails() {
    colorpicker()
        .arg("1234567")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected 6 or 8 hex digits, found 7"));
}

#[test]
fn test_bad_alpha_pair_fails() {
    colorpicker()
        .arg("#00FF00XY")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("alpha channel"));
}

#[test]
fn test_unknown_option_is_usage_error() {
    colorpicker()
        .arg("--bogus")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_help_lists_options() {
    colorpicker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-alpha"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("[COLOR]"));
}

#[test]
fn test_version() {
    colorpicker()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("colorpicker "));
}
