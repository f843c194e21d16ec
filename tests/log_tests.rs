//! Integration tests for log and show commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, log_entry, moodjour_cmd};

#[test]
fn test_log_creates_entry_file() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--text", "Quiet walk by the river", "--mood", "peaceful"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created entry for 2025-01-15 (Peaceful)",
        ));

    let content = fs::read_to_string(temp.path().join("entries/2025-01-15.toml")).unwrap();
    assert!(content.contains("mood_suggested = \"Peaceful\""));
    assert!(content.contains("Quiet walk by the river"));
}

#[test]
fn test_log_updates_existing_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    log_entry(temp.path(), "2025-01-15", "Calm", "Morning pages");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--override", "Tired", "--sleep", "5.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry for 2025-01-15 (Tired)"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wednesday, January 15, 2025"))
        .stdout(predicate::str::contains("Mood: Tired (Tired), originally Calm"))
        .stdout(predicate::str::contains("Sleep: 5.5h"))
        .stdout(predicate::str::contains("Morning pages"));
}

#[test]
fn test_log_clear_override() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    log_entry(temp.path(), "2025-01-15", "Calm", "Morning pages");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--override", "Anxious"])
        .assert()
        .success();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--clear-override"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Calm)"));
}

#[test]
fn test_log_unknown_mood() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--text", "Hmm", "--mood", "Elated"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Unknown mood: 'Elated'"))
        .stderr(predicate::str::contains("moodjour moods"));

    assert!(!temp.path().join("entries/2025-01-15.toml").exists());
}

#[test]
fn test_log_invalid_date() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "next tuesday", "--text", "Plans", "--mood", "Hopeful"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_log_future_date_rejected() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2999-01-01", "--text", "Someday", "--mood", "Hopeful"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("in the future"));
}

#[test]
fn test_log_sleep_out_of_range() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--text", "Long nap", "--sleep", "14"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Sleep hours must be between 0 and 12"));
}

#[test]
fn test_log_empty_text_rejected() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-15", "--text", "   "])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn test_log_today_without_date() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "--text", "Right now", "--mood", "Content"])
        .assert()
        .success();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Right now"));
}

#[test]
fn test_show_missing_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-15"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No entry found for 2025-01-15"));
}

#[cfg(unix)]
#[test]
fn test_log_uses_editor_without_text() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let script = temp.path().join("fake-editor.sh");
    fs::write(&script, "#!/bin/sh\necho 'Written in the editor' >> \"$1\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .env("EDITOR", &script)
        .args(["log", "2025-01-15", "--mood", "Reflective"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("entries/2025-01-15.toml")).unwrap();
    assert!(content.contains("Written in the editor"));
    assert!(!content.contains("Lines starting with"));
    assert!(!temp.path().join(".moodjour/draft.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_log_failing_editor() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .env("EDITOR", "false")
        .args(["log", "2025-01-15", "--mood", "Calm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Editor"));

    assert!(!temp.path().join("entries/2025-01-15.toml").exists());
}

#[test]
fn test_log_days_ago_beyond_calendar() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["log", "4000000000 days ago", "--text", "Long ago", "--mood", "Calm"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid date"));
}
