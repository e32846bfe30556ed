//! Integration tests for the `termlink` CLI binary.

use assert_cmd::Command;
use predicates::prelude::*;

const DETECTION_VARS: [&str; 8] = [
    "FORCE_HYPERLINK",
    "DOMTERM",
    "VTE_VERSION",
    "TERM_PROGRAM",
    "TERM_PROGRAM_VERSION",
    "TERM",
    "WT_SESSION",
    "KONSOLE_VERSION",
];

/// A `termlink` command with no detection or color variables inherited.
fn termlink() -> Command {
    let mut cmd = Command::cargo_bin("termlink").unwrap();
    for var in DETECTION_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("NO_COLOR")
        .env_remove("CLICOLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_no_args_shows_report() {
    termlink()
        .assert()
        .success()
        .stdout(predicate::str::contains("Hyperlinks (OSC 8): no"));
}

#[test]
fn test_link_falls_back_without_support() {
    termlink()
        .args(["link", "Hello", "https://google.com"])
        .assert()
        .success()
        .stdout("Hello (https://google.com)\x1b[0m\n");
}

#[test]
fn test_link_uses_osc8_when_forced() {
    termlink()
        .env("FORCE_HYPERLINK", "1")
        .args(["link", "Hello", "https://google.com"])
        .assert()
        .success()
        .stdout("\x1b]8;;https://google.com\x07Hello\x1b]8;;\x07\x1b[0m\n");
}

#[test]
fn test_color_link_with_forced_color() {
    termlink()
        .env("FORCE_HYPERLINK", "1")
        .env("CLICOLOR_FORCE", "1")
        .args(["link", "--style", "red", "Hello", "https://google.com"])
        .assert()
        .success()
        .stdout("\x1b]8;;https://google.com\x07\x1b[31mHello\x1b]8;;\x07\x1b[0m\n");
}

#[test]
fn test_force_parenthetical_flag() {
    termlink()
        .env("TERM", "xterm-kitty")
        .args(["link", "-p", "Hello", "https://google.com"])
        .assert()
        .success()
        .stdout("Hello (https://google.com)\x1b[0m\n");
}

#[test]
fn test_plain_strips_escape_codes() {
    termlink()
        .env("FORCE_HYPERLINK", "1")
        .args(["--plain", "link", "Hello", "https://google.com"])
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_strict_rejects_unknown_style() {
    termlink()
        .args(["link", "--strict", "--style", "red sparkly", "Hello", "https://x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sparkly"));
}

#[test]
fn test_lenient_ignores_unknown_style() {
    termlink()
        .env("CLICOLOR_FORCE", "1")
        .args(["link", "--style", "sparkly bold", "Hello", "https://x.com"])
        .assert()
        .success()
        .stdout("\x1b[1mHello (https://x.com)\x1b[0m\n");
}

#[test]
fn test_detect_json_reports_matched_rule() {
    termlink()
        .env("TERM_PROGRAM", "WezTerm")
        .args(["detect", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hyperlinks\": true"))
        .stdout(predicate::str::contains("\"kind\": \"program\""))
        .stdout(predicate::str::contains("\"WezTerm\""));
}

#[test]
fn test_detect_text_names_rule() {
    termlink()
        .env("VTE_VERSION", "7600")
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("VTE_VERSION >= 0.50.0"));
}

#[test]
fn test_styles_json_lists_tokens() {
    termlink()
        .args(["styles", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bgMagenta\""))
        .stdout(predicate::str::contains("\"code\": 45"));
}

#[test]
fn test_respects_no_color() {
    termlink()
        .env("NO_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_demo_runs() {
    termlink()
        .args(["--plain", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Here's Twitter: Twitter (https://twitter.com)."));
}

#[test]
fn test_completions() {
    termlink()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termlink"));
}

#[test]
fn test_help_flag() {
    termlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compose clickable terminal hyperlinks"));
}
