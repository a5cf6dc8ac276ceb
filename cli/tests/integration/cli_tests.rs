//! CLI surface tests

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const USAGE_REMINDER: &str = "Kindly provide a command line option for the script to execute.";

fn labprep() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("labprep"));
    cmd.env("NO_COLOR", "1");
    for var in [
        "LABPREP_TOOL_URL",
        "LABPREP_SUPPORT_SHARE",
        "LABPREP_MOUNT_POINT",
        "LABPREP_BASTION",
        "LABPREP_NOTIFY_REPO",
        "LABPREP_BASTION_PASSWORD",
        "LABPREP_BASTION_PASSWORD_FILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// --- Help and version ---

#[test]
fn test_help_lists_profile_flags() {
    labprep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--vm"))
        .stdout(predicate::str::contains("--laptop"))
        .stdout(predicate::str::contains("--packages"))
        .stdout(predicate::str::contains("--suplogs"))
        .stdout(predicate::str::contains("--notify"))
        .stdout(predicate::str::contains("Overrides"));
}

#[test]
fn test_version_flag_shows_version() {
    labprep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("labprep"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    labprep().arg("--bogus").assert().code(2);
}

// --- No flags ---

#[test]
fn test_no_flags_prints_usage_reminder_once_and_exits_zero() {
    labprep()
        .assert()
        .success()
        .stdout(predicate::str::contains(USAGE_REMINDER).count(1))
        .stdout(predicate::str::contains("✗"));
}

#[test]
fn test_no_flags_reminder_survives_quiet() {
    labprep()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(USAGE_REMINDER));
}

#[test]
fn test_no_flags_ignores_invalid_env_override() {
    labprep()
        .env("LABPREP_MOUNT_POINT", "relative")
        .assert()
        .success()
        .stdout(predicate::str::contains(USAGE_REMINDER).count(1))
        .stderr(predicate::str::is_empty());
}

// --- --test ---

#[test]
fn test_test_flag_alone_does_nothing() {
    labprep()
        .arg("-t")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// --- --dry-run ---

#[test]
fn test_dry_run_vm_lists_all_steps() {
    labprep()
        .args(["--dry-run", "--vm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ensure packages"))
        .stdout(predicate::str::contains("4. mount support share"))
        .stdout(predicate::str::contains("6. install notification tool"))
        .stdout(predicate::str::contains("sudo alien -i ilorest-4.6.0.0-11.x86_64.rpm"));
}

#[test]
fn test_dry_run_notify_lists_only_notification_tool() {
    labprep()
        .args(["--dry-run", "-n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. install notification tool"))
        .stdout(predicate::str::contains("2.").not())
        .stdout(predicate::str::contains("ensure packages").not());
}

#[test]
fn test_dry_run_uses_env_overrides() {
    labprep()
        .args(["--dry-run", "--suplogs"])
        .env("LABPREP_SUPPORT_SHARE", "nas01:/logs")
        .env("LABPREP_MOUNT_POINT", "/mnt/logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("sudo mount -t nfs nas01:/logs /mnt/logs"));
}

#[test]
fn test_dry_run_without_profile_prints_reminder() {
    labprep()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(USAGE_REMINDER));
}

// --- Override validation ---

#[test]
fn test_invalid_share_exits_one() {
    labprep()
        .args(["--suplogs", "--support-share", "nas01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid support share"));
}

#[test]
fn test_invalid_tool_url_exits_one() {
    labprep()
        .args(["--packages", "--tool-url", "ftp://dist/tool.rpm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"));
}
