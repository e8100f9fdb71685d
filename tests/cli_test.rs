//! End-to-end tests running the compiled extension binary

use assert_cmd::Command;
use chrono::{DateTime, Local};
use predicates::prelude::*;
use rstest::rstest;

const BIN: &str = "pm-ext-test-rust";

const PM_VARS: [&str; 6] = [
    "PM_CURRENT_PROJECT",
    "PM_CONFIG_PATH",
    "PM_VERSION",
    "PM_EXTENSION_DIR",
    "PM_EXTENSION_NAME",
    "PM_COMMAND_NAME",
];

/// Binary with a clean PM context and colors off
fn extension() -> Command {
    let mut cmd = Command::cargo_bin(BIN).expect("binary built");
    for var in PM_VARS {
        cmd.env_remove(var);
    }
    cmd.env("PM_EXT_COLOR", "never").env_remove("PM_EXT_LOG_LEVEL");
    cmd
}

fn help_text() -> String {
    let out = extension().output().expect("run without arguments");
    String::from_utf8(out.stdout).expect("utf-8 help")
}

#[test]
fn given_no_arguments_when_running_then_help_printed() {
    extension()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: pm test-rust [COMMAND]\n"))
        .stdout(predicate::str::contains("Homepage: https://github.com/testuser/test-rust"))
        .stderr(predicate::str::is_empty());
}

#[rstest]
#[case("")]
#[case("--help")]
#[case("-h")]
#[case("--version")]
#[case("--")]
#[case("status")]
#[case("DEPLOY")]
fn given_unrecognized_argument_when_running_then_output_equals_help(#[case] arg: &str) {
    let expected = help_text();

    extension()
        .arg(arg)
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
#[case("deploy")]
#[case("check")]
#[case("config")]
#[case("unknown")]
fn given_any_command_and_bad_settings_when_running_then_exit_zero(#[case] arg: &str) {
    extension()
        .arg(arg)
        .env("PM_CURRENT_PROJECT", "{not json")
        .env("PM_EXT_COLOR", "rainbow")
        .assert()
        .code(0);
}

#[test]
fn given_json_project_when_checking_then_project_fields_printed() {
    extension()
        .arg("check")
        .env("PM_CURRENT_PROJECT", r#"{"name":"Foo","path":"/x"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Running in PM project context"))
        .stdout(predicate::str::contains("Project: Foo"))
        .stdout(predicate::str::contains("Path: /x"));
}

#[test]
fn given_plain_project_when_checking_then_raw_string_printed() {
    extension()
        .arg("check")
        .env("PM_CURRENT_PROJECT", "hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: hello"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn given_no_project_when_checking_then_warning_printed() {
    extension()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️  Not running in PM project context"))
        .stdout(predicate::str::contains("✅ Running in PM project context").not());
}

#[test]
fn given_no_project_when_deploying_then_project_line_omitted() {
    extension()
        .arg("deploy")
        .env("PM_CONFIG_PATH", "/etc/pm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current PM project").not())
        .stdout(predicate::str::contains("ℹ️  PM config: /etc/pm"));
}

#[test]
fn given_config_command_when_running_then_timestamp_is_current_iso8601() {
    let before = Local::now();
    let out = extension()
        .arg("config")
        .env("PM_CURRENT_PROJECT", "demo")
        .output()
        .expect("run config");
    let after = Local::now();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("  PM Project: demo\n"));
    assert!(!stdout.contains("PM Config"));

    let ts = stdout
        .lines()
        .find_map(|l| l.strip_prefix("  Timestamp: "))
        .expect("timestamp line");
    let ts: DateTime<Local> = DateTime::parse_from_rfc3339(ts)
        .expect("ISO-8601 timestamp")
        .with_timezone(&Local);
    let micros = ts.timestamp_micros();
    assert!(micros >= before.timestamp_micros() && micros <= after.timestamp_micros());
}

#[test]
fn given_debug_log_level_when_running_then_logs_go_to_stderr_only() {
    let expected = help_text();

    extension()
        .env("PM_EXT_LOG_LEVEL", "debug")
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("dispatching"));
}

#[test]
fn given_invalid_color_and_debug_level_when_running_then_debug_logs_still_emitted() {
    extension()
        .arg("check")
        .env("PM_EXT_LOG_LEVEL", "debug")
        .env("PM_EXT_COLOR", "rainbow")
        .assert()
        .success()
        .stderr(predicate::str::contains("rainbow"))
        .stderr(predicate::str::contains("dispatching"));
}
