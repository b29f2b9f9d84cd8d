//! Integration tests for the rubopop binary

use assert_cmd::Command;
use predicates::prelude::*;

fn rubopop() -> Command {
    Command::cargo_bin("rubopop").unwrap()
}

#[test]
fn test_defaults_are_printed() {
    rubopop()
        .assert()
        .success()
        .stdout(predicate::str::contains("rubocop_todo_branch: rubocop_todo_branch"))
        .stdout(predicate::str::contains("limit: 10"))
        .stdout(predicate::str::contains("repository: github"));
}

#[test]
fn test_flags_are_applied() {
    rubopop()
        .args(["-t", "5", "--master", "main"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit: 5"))
        .stdout(predicate::str::contains("master_branch: main"))
        .stdout(predicate::str::contains("git_origin: origin"));
}

#[test]
fn test_help_exits_successfully() {
    rubopop()
        .args(["--origin", "upstream", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rubopop [options]"))
        .stdout(predicate::str::contains("--post-checkout"))
        .stdout(predicate::str::contains("Display help"))
        .stdout(predicate::str::contains("git_origin").not());
}

#[test]
fn test_unknown_flag_exits_with_failure() {
    rubopop()
        .arg("--bogus")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown flag '--bogus'"))
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn test_bad_limit_exits_with_failure() {
    rubopop()
        .args(["--limit", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value 'abc' for '--limit'"));
}

#[test]
fn test_missing_value_exits_with_failure() {
    rubopop()
        .arg("-o")
        .assert()
        .failure()
        .stderr(predicate::str::contains("flag '--origin' requires a value"));
}

#[test]
fn test_bare_separator_exits_with_failure() {
    rubopop()
        .args(["--", "-t", "5"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown flag '--'"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_value_exits_with_failure() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    rubopop()
        .args([OsStr::new("-m"), OsStr::from_bytes(b"\xff")])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("for '-m': expected string"));
}

#[test]
fn test_help_goes_to_stdout_only() {
    rubopop()
        .arg("-h")
        .assert()
        .success()
        .code(0)
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage: rubopop [options]"));
}
